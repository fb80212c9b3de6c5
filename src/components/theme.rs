use serde::{Deserialize, Serialize};

use crate::storage;

/// Local-storage key for the theme preference.
pub const THEME_KEY: &str = "theme-storage";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
	pub is_dark: bool,
	#[serde(default)]
	pub high_contrast: bool,
}

impl ThemeConfig {
	/// Stored preference, falling back to the OS color scheme.
	pub fn load() -> Self {
		storage::load(THEME_KEY).unwrap_or_else(Self::from_media_query)
	}

	fn from_media_query() -> Self {
		let is_dark = web_sys::window()
			.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
			.map(|mql| mql.matches())
			.unwrap_or(false);
		Self {
			is_dark,
			high_contrast: false,
		}
	}

	pub fn toggle_dark(&mut self) {
		self.is_dark = !self.is_dark;
	}

	pub fn toggle_contrast(&mut self) {
		self.high_contrast = !self.high_contrast;
	}

	/// Mirror the flags as `dark` / `high-contrast` classes on the document
	/// element so the stylesheet can follow.
	pub fn apply(&self) {
		let Some(root) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
		else {
			return;
		};
		let classes = root.class_list();
		let _ = classes.toggle_with_force("dark", self.is_dark);
		let _ = classes.toggle_with_force("high-contrast", self.high_contrast);
	}
}
