mod avatar;
mod google;
mod login;
mod logout;
mod me;
mod profile;
mod register;

pub use avatar::*;
pub use google::*;
pub use login::*;
pub use logout::*;
pub use me::*;
pub use profile::*;
pub use register::*;
