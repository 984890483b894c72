//! ciphernexus application bootstrap.

pub mod app;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use app::{Application, CipherNexus};
pub use config::RunConfiguration;
pub use error::RunError;
pub use lifecycle::{Bootstrap, Outcome};
