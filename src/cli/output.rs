use anyhow::Result;
use hilite_core::HighlightOutcome;

/// Print one line per committed highlight.
pub(crate) fn print_plain(outcome: &HighlightOutcome) {
	if outcome.is_empty() {
		println!("No highlights");
		return;
	}

	for line in plain_lines(outcome) {
		println!("{line}");
	}
}

fn plain_lines(outcome: &HighlightOutcome) -> Vec<String> {
	outcome
		.highlights
		.iter()
		.map(|record| format!("{}..{}\t{}", record.start, record.end, record.text))
		.collect()
}

/// Format the outcome as pretty-printed JSON.
pub(crate) fn format_outcome_json(outcome: &HighlightOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn print_json(outcome: &HighlightOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
