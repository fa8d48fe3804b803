//! Run-scoped logging.
//!
//! Installs a global `tracing` subscriber that tees formatted
//! `[timestamp] [LEVEL] message` lines to stdout and a per-run log file
//! named from the run-start timestamp. Entirely disabled when the
//! `enable_logging` setting is off.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::error::Result;
use crate::settings::Settings;

/// `[timestamp] [LEVEL] message fields` line format.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
	N: for<'a> FormatFields<'a> + 'static,
{
	fn format_event(
		&self,
		ctx: &FmtContext<'_, S, N>,
		mut writer: Writer<'_>,
		event: &tracing::Event<'_>,
	) -> std::fmt::Result {
		write!(
			writer,
			"[{}] [{}] ",
			Local::now().format("%Y-%m-%d %H:%M:%S"),
			event.metadata().level()
		)?;
		ctx.format_fields(writer.by_ref(), event)?;
		writeln!(writer)
	}
}

/// Log file name for a run starting now.
fn run_log_file_name() -> String {
	format!("test-{}.log", Local::now().format("%Y%m%d%H%M%S"))
}

/// Initializes run logging according to settings.
///
/// Returns the path of the run log file, or `None` when logging is
/// disabled. Repeated initialization is tolerated; the first subscriber
/// wins and later calls only create the log file.
pub fn init_logging(settings: &Settings) -> Result<Option<PathBuf>> {
	if !settings.enable_logging {
		return Ok(None);
	}

	let log_dir = Path::new(&settings.log_path);
	fs::create_dir_all(log_dir)?;
	let log_file_path = log_dir.join(run_log_file_name());
	let file = File::create(&log_file_path)?;

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let writer = std::io::stdout.and(Mutex::new(file));

	// try_init so a second harness in the same process is a no-op.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.event_format(LineFormat)
		.with_writer(writer)
		.try_init();

	tracing::debug!(path = %log_file_path.display(), "run logging initialized");
	Ok(Some(log_file_path))
}
