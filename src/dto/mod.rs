pub mod guess;
pub mod health;
pub mod technology;
pub mod validation;
