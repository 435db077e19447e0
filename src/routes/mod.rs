pub(crate) mod auth;
pub(crate) mod feedback;
pub mod health_checks;
pub(crate) mod project;

pub use health_checks::*;
