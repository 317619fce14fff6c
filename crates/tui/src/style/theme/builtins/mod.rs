mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use loader::{BuiltinTheme, load_builtin_themes};

use super::types::{Theme, ThemeError};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// The theme marked as default among the builtins.
pub fn default_theme() -> Theme {
	builtins()
		.iter()
		.find(|builtin| builtin.is_default)
		.or_else(|| builtins().first())
		.map(|builtin| builtin.theme)
		.unwrap_or_else(|| panic!("built-in theme set is empty"))
}

/// Canonical names of the builtin themes, sorted.
pub fn names() -> Vec<String> {
	builtins()
		.iter()
		.map(|builtin| builtin.name.clone())
		.collect()
}

/// Look up a builtin theme by name or alias, ignoring case, `-` and `_`.
pub fn by_name(name: &str) -> Result<Theme, ThemeError> {
	let wanted = loader::normalise_key(name);
	builtins()
		.iter()
		.find(|builtin| {
			loader::normalise_key(&builtin.name) == wanted
				|| builtin
					.aliases
					.iter()
					.any(|alias| loader::normalise_key(alias) == wanted)
		})
		.map(|builtin| builtin.theme)
		.ok_or_else(|| ThemeError::Unknown {
			name: name.to_string(),
			available: names(),
		})
}

fn builtins() -> &'static [BuiltinTheme] {
	static BUILTINS: OnceLock<Vec<BuiltinTheme>> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		load_builtin_themes(&BUILTIN_THEME_DIR)
			.unwrap_or_else(|error| panic!("failed to load built-in themes: {error:#}"))
	})
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Modifier};

	use super::*;

	#[test]
	fn builtins_load_and_are_sorted() {
		assert_eq!(names(), ["light", "slate", "solarized"]);
	}

	#[test]
	fn slate_is_the_default() {
		let theme = default_theme();
		assert_eq!(theme, by_name("slate").unwrap());
		assert_eq!(theme.highlight.bg, Some(Color::Rgb(0xfd, 0xe0, 0x47)));
		assert!(theme.title.add_modifier.contains(Modifier::BOLD));
	}

	#[test]
	fn aliases_and_spelling_variants_resolve() {
		assert_eq!(by_name("dark").unwrap(), by_name("slate").unwrap());
		assert_eq!(
			by_name("Solarized_Dark").unwrap(),
			by_name("solarized").unwrap()
		);
	}

	#[test]
	fn unknown_theme_lists_available() {
		let err = by_name("neon").unwrap_err();
		assert_eq!(
			err.to_string(),
			"unknown theme `neon` (available: light, slate, solarized)"
		);
	}
}
