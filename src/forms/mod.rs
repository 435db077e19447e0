mod feedback;
mod project;
mod user;

pub use feedback::*;
pub use project::*;
pub use user::*;
