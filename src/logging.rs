//! File logging.
//!
//! The terminal belongs to the UI while the highlighter runs, so log records
//! go to `hilite.log` in the data directory instead of stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;
use crate::settings::LogSettings;

pub(crate) const LOG_FILE_NAME: &str = "hilite.log";

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered records are flushed.
pub(crate) fn init(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
	if !settings.enabled {
		return Ok(None);
	}

	let dir = app_dirs::get_data_dir()?;
	let (filter, (writer, guard)) = file_writer_parts(&dir, &settings.level)?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(Some(guard))
}

type Writer = (tracing_appender::non_blocking::NonBlocking, WorkerGuard);

fn file_writer_parts(dir: &Path, level: &str) -> Result<(EnvFilter, Writer)> {
	let filter = parse_filter(level)?;
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
	Ok((filter, tracing_appender::non_blocking(appender)))
}

/// Parse a `tracing` filter directive such as `info` or `hilite_core=debug`.
pub(crate) fn parse_filter(level: &str) -> Result<EnvFilter> {
	EnvFilter::try_new(level).with_context(|| format!("invalid log filter `{level}`"))
}
