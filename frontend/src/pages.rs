pub mod error_page;
pub mod project_page;
pub mod projects_page;
