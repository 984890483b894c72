//! Shared utilities for integration tests.

use std::cell::Cell;
use std::io;
use std::sync::{Arc, Mutex};

use ciphernexus::{Application, RunError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// In-memory log sink for a scoped `tracing` subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with every event on this thread written to a buffer.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

/// Like [`capture_logs`], but events pass through `filter` first.
pub fn capture_filtered_logs<R>(filter: EnvFilter, f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(logs.clone())
            .with_ansi(false),
    );

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

/// Stub application that records the flag it was built with.
pub struct StubApp {
    failure: Option<&'static str>,
}

impl StubApp {
    pub fn failing(message: &'static str) -> Self {
        Self {
            failure: Some(message),
        }
    }

    /// Factory that stores the constructor argument in `seen` and builds an
    /// app which fails with `failure` when given one.
    pub fn factory<'a>(
        seen: &'a Cell<Option<bool>>,
        failure: Option<&'static str>,
    ) -> impl FnOnce(bool) -> StubApp + 'a {
        move |verbose| {
            seen.set(Some(verbose));
            StubApp { failure }
        }
    }
}

impl Application for StubApp {
    async fn run(self) -> Result<(), RunError> {
        match self.failure {
            Some(message) => Err(RunError::new(message)),
            None => Ok(()),
        }
    }
}
