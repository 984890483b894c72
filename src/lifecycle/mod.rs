//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Parse config → Construct application → Execute (blocking)
//!
//! State (state.rs):
//!     Running → Terminated(Success) | Terminated(Failure)
//!
//! Shutdown (shutdown.rs):
//!     Outcome → fatal log on failure → process exit code
//! ```
//!
//! # Design Decisions
//! - Fail fast: any run failure is fatal, no retry
//! - Only `main` turns an outcome into a process exit
//! - The application is injected as a factory so the controller can be driven by stubs

pub mod shutdown;
pub mod startup;
pub mod state;

pub use shutdown::terminate;
pub use startup::{construct, execute, Bootstrap};
pub use state::{Outcome, Running};
