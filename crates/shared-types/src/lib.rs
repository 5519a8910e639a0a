pub mod claims;
pub mod config;
pub mod error;
pub mod models;
pub mod pass_status;

pub use claims::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use pass_status::*;
