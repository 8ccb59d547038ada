// navbar and routes
pub mod navbar;

// project cards
pub mod project_card;
pub mod status_badge;
pub mod tech_tags;
