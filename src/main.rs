//! ciphernexus
//!
//! # Architecture Overview
//!
//! ```text
//!     argv ──▶ config ──▶ RunConfiguration ──▶ CipherNexus::new(verbose)
//!                                                      │
//!                                                      ▼
//!     exit code ◀── terminate ◀── Outcome ◀──── execute (blocking)
//! ```

use std::process::ExitCode;

use ciphernexus::lifecycle::{terminate, Bootstrap};
use ciphernexus::observability::logging;
use ciphernexus::{CipherNexus, RunConfiguration};

fn main() -> ExitCode {
    let config = RunConfiguration::from_env();
    logging::init(config.verbose());

    let outcome = Bootstrap::new(CipherNexus::new).launch(config);
    terminate(outcome)
}
