use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!(
		"  UI theme: {}",
		config
			.theme_name
			.as_deref()
			.unwrap_or("(built-in default)")
	));
	lines.push(format!("  Title: {}", config.title));
	match config.wrap_width {
		Some(width) => lines.push(format!("  Wrap width: {width}")),
		None => lines.push("  Wrap width: panel width".to_string()),
	}
	lines.push(format!("  Overlap: {}", config.overlap.as_str()));
	lines.push(format!("  Logging: {}", bool_to_word(config.log.enabled)));
	if config.log.enabled {
		lines.push(format!("  Log level: {}", config.log.level));
	}
	lines.push(format!("  Output: {}", config.output.as_str()));
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use hilite_core::OverlapMode;

	use super::super::LogSettings;
	use super::*;
	use crate::cli::OutputFormat;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			theme_name: Some("light".into()),
			theme: hilite_tui::default_theme(),
			title: "Resume".into(),
			wrap_width: None,
			overlap: OverlapMode::Clip,
			log: LogSettings {
				enabled: false,
				level: "debug".into(),
			},
			output: OutputFormat::Json,
		};

		assert_eq!(
			summary_lines(&config),
			[
				"Effective configuration:",
				"  UI theme: light",
				"  Title: Resume",
				"  Wrap width: panel width",
				"  Overlap: clip",
				"  Logging: no",
				"  Output: json",
			]
		);
	}
}
