use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the logo quiz backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::technology::get_technology_count,
        crate::routes::technology::get_technology_image,
        crate::routes::guess::submit_guess,
        crate::routes::scores::get_all_scores,
        crate::routes::scores::get_player_scores,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::technology::TechnologyCountResponse,
            crate::dto::guess::GuessRequest,
            crate::dto::guess::GuessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "technologies", description = "Technology catalog"),
        (name = "game", description = "Guesses and scores"),
    )
)]
pub struct ApiDoc;
