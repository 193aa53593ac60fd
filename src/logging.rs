// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logging setup.
//!
//! Console logs go to stderr so they never mix with the report on stdout.
//! While activities are being updated, a scoped file sink takes over so
//! client chatter lands in a log file instead of the terminal.

use crate::config::LogFormat;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONSOLE_FILTER: &str = "strava_renamer=info,warn";
const FILE_FILTER: &str = "strava_renamer=debug,info";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global console subscriber.
pub fn init(format: LogFormat) {
    let json = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
    });
    let pretty = (format == LogFormat::Pretty).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter(CONSOLE_FILTER))
        .with(json)
        .with(pretty)
        .init();
}

/// Redirects this thread's logs to a file until dropped.
pub struct LogSinkGuard {
    path: PathBuf,
    _guard: DefaultGuard,
}

impl LogSinkGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Send logs from the current thread to `path` (truncated) until the guard
/// is dropped, after which the previous subscriber is restored.
pub fn scoped_file_sink<P: AsRef<Path>>(path: P) -> io::Result<LogSinkGuard> {
    let path = path.as_ref().to_path_buf();
    let file = File::create(&path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(env_filter(FILE_FILTER))
        .finish();

    Ok(LogSinkGuard {
        path,
        _guard: tracing::subscriber::set_default(subscriber),
    })
}
