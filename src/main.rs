mod app_dirs;
mod cli;
mod logging;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use hilite_core::Highlighter;
use hilite_tui::{App, UiLabels};
use settings::ResolvedConfig;
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in hilite_tui::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _log_guard = logging::init(&resolved.log)?;

	run_highlighter(resolved)
}

/// Run the terminal highlighter and print what was highlighted.
fn run_highlighter(settings: ResolvedConfig) -> Result<()> {
	let format = settings.output;
	let highlighter = Highlighter::new().with_overlap(settings.overlap);
	let app = App::new(highlighter)
		.with_theme(settings.theme)
		.with_labels(UiLabels::default().with_title(settings.title))
		.with_wrap_width(settings.wrap_width);

	info!(overlap = settings.overlap.as_str(), "starting highlighter");
	let outcome = hilite_tui::run(app).context("terminal session failed")?;
	info!(highlights = outcome.highlights.len(), "highlighter closed");

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
