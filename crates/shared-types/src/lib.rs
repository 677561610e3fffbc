pub mod analytics;
pub mod config;
pub mod error;
pub mod session;
pub mod user;
pub mod workflow;

pub use analytics::*;
pub use config::*;
pub use error::*;
pub use session::*;
pub use user::*;
pub use workflow::*;
