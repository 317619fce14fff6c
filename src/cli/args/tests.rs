use clap::{CommandFactory, Parser};

use super::options::OverlapArg;
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	CliArgs::try_parse_from(std::iter::once("hilite").chain(args.iter().copied()))
		.expect("parses")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_leave_everything_to_configuration() {
	let parsed = parse(&[]);
	assert_eq!(parsed.output, None);
	assert_eq!(parsed.overlap, None);
	assert_eq!(parsed.wrap_width, None);
	assert!(!parsed.print_config);
	assert!(!parsed.no_log);
}

#[test]
fn parses_overrides() {
	let parsed = parse(&[
		"--theme",
		"light",
		"-w",
		"40",
		"--overlap",
		"clip",
		"-o",
		"json",
		"-c",
		"a.toml",
		"-c",
		"b.toml",
	]);
	assert_eq!(parsed.theme.as_deref(), Some("light"));
	assert_eq!(parsed.wrap_width, Some(40));
	assert_eq!(parsed.overlap, Some(OverlapArg::Clip));
	assert_eq!(parsed.output, Some(OutputFormat::Json));
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn rejects_unknown_overlap_mode() {
	let result = CliArgs::try_parse_from(["hilite", "--overlap", "merge"]);
	assert!(result.is_err());
}
