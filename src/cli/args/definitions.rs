use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, OverlapArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `hilite` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hilite",
	version,
	long_version = long_version(),
	about = "Select passages of a paragraph with the mouse and highlight them",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HILITE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Heading shown above the text (default: Text Highlighter)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name or alias (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'w',
		long = "wrap-width",
		value_name = "COLUMNS",
		help = "Wrap the text at most this many columns wide (default: panel width)"
	)]
	pub(crate) wrap_width: Option<u16>,
	#[arg(
		long,
		value_enum,
		help = "How overlapping highlights are drawn (default: literal)"
	)]
	pub(crate) overlap: Option<OverlapArg>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		env = "HILITE_LOG",
		help = "Log filter directive, e.g. `debug` or `hilite_core=trace` (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(long = "no-log", help = "Do not write a log file (default: disabled)")]
	pub(crate) no_log: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List built-in themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "How to print the highlights on exit (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
}
