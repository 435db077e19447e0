pub mod auth;
pub mod avatar;
pub mod feedback;
pub mod project;
