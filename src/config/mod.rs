//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process arguments
//!     → args.rs (Go-style flag normalisation, clap parsing)
//!     → RunConfiguration (immutable)
//!     → passed by value to the application constructor
//! ```
//!
//! # Design Decisions
//! - One option only: `verbose`, default `false`
//! - Malformed input is reported by clap as a usage error

pub mod args;
pub mod schema;

pub use args::Cli;
pub use schema::RunConfiguration;
