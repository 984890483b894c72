//! Run configuration definition.

use std::ffi::OsString;

use crate::config::args::{self, Cli};

/// Options derived from the command line at process start.
///
/// Created once and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfiguration {
    verbose: bool,
}

impl RunConfiguration {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether verbose logging was requested.
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Parse the configuration from an argument list whose first element is
    /// the program name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = args::parse(args)?;
        Ok(Self::from(cli))
    }

    /// Parse the configuration from the process arguments.
    ///
    /// Usage errors print clap's diagnostic and exit with status 2.
    pub fn from_env() -> Self {
        Self::try_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }
}

impl From<Cli> for RunConfiguration {
    fn from(cli: Cli) -> Self {
        Self::new(cli.verbose)
    }
}
