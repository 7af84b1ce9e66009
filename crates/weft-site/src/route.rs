//! Navigation routes and output path mapping.

use serde::Deserialize;

/// A labelled link to a page of the site or to an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
	/// Link text
	pub label: String,
	/// Site-relative path (`""`, `about`, `blog/post`) or absolute URL
	pub path: String,
	/// Open in a new tab (`target="_blank" rel="noreferrer"`)
	#[serde(default)]
	pub new_tab: bool,
}

impl Route {
	/// Route to `path` labelled `label`.
	pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			path: path.into(),
			new_tab: false,
		}
	}

	/// Opens the link in a new tab.
	pub fn new_tab(mut self) -> Self {
		self.new_tab = true;
		self
	}

	/// Returns true for `http://` and `https://` targets.
	pub fn is_external(&self) -> bool {
		is_external(&self.path)
	}

	/// Path with surrounding slashes removed; empty for the home page.
	pub fn normalized_path(&self) -> &str {
		normalize_path(&self.path)
	}

	/// Value for the `href` attribute.
	pub fn href(&self) -> String {
		if self.is_external() {
			self.path.clone()
		} else {
			format!("/{}", self.normalized_path())
		}
	}
}

pub(crate) fn is_external(path: &str) -> bool {
	path.starts_with("http://") || path.starts_with("https://")
}

/// Strips surrounding whitespace and slashes.
pub fn normalize_path(path: &str) -> &str {
	path.trim().trim_matches('/')
}

/// Output file for a document path.
///
/// The empty path maps to `index.html`; anything else gets `.html` appended
/// after normalization, so `about` and `/about/` both map to `about.html` and
/// `blog/post` maps to `blog/post.html`. A path already ending in `.html` is
/// kept as is.
pub fn output_path(path: &str) -> String {
	let path = normalize_path(path);
	if path.is_empty() {
		"index.html".to_string()
	} else if path.ends_with(".html") {
		path.to_string()
	} else {
		format!("{path}.html")
	}
}
