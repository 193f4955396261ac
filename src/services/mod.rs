/// OpenAPI documentation generation.
pub mod documentation;
/// Guess submission and score update.
pub mod guess_service;
/// Health check service.
pub mod health_service;
/// Score board retrieval.
pub mod score_service;
/// Technology catalog lookups.
pub mod technology_service;
