//! Site configuration files
//!
//! A site can be described entirely in TOML:
//!
//! ```toml
//! output_dir = "public"
//! minify = true
//!
//! [site]
//! site_name = "Great Site"
//! base_url = "https://example.com"
//!
//! [layout]
//! header = "normal"
//!
//! [[navigation]]
//! label = "About"
//! path = "about"
//!
//! [[pages]]
//! path = "about"
//! title = "About"
//! body = ["We make things."]
//! styles = [{ family = "padding", params = { length = 8 } }]
//! ```
//!
//! Values are layered the same way every time: file first, then `WEFT_`
//! environment overrides, then validation.

use crate::document::{Document, DocumentOptions};
use crate::error::ConfigError;
use crate::layout::Layout;
use crate::metadata::Metadata;
use crate::robots::RobotsRule;
use crate::route::{Route, output_path};
use crate::website::Website;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use weft_markup::Node;
use weft_markup::elements::{article, h1, p};
use weft_style::{Modifier, ParameterBag, StyleFamily, Theme};

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "WEFT_";

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// One style applied to a page body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleConfig {
	/// Style family name, e.g. `padding` or `bg`
	pub family: StyleFamily,
	/// Modifiers prefixed to every class, e.g. `["md", "hover"]`
	#[serde(default)]
	pub modifiers: Vec<Modifier>,
	/// Family parameters
	#[serde(default)]
	pub params: ParameterBag,
}

/// A page declared in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	/// Site path, `""` for the home page
	pub path: String,
	/// Page title, also rendered as the heading
	pub title: Option<String>,
	/// Page description
	pub description: Option<String>,
	/// Paragraphs of body text
	pub body: Vec<String>,
	/// Styles applied to the page's `<article>`
	pub styles: Vec<StyleConfig>,
}

impl PageConfig {
	/// Builds the document for this page.
	pub fn to_document(&self) -> Document {
		let mut metadata = Metadata::new();
		metadata.title = self.title.clone();
		metadata.description = self.description.clone();

		let heading = self
			.title
			.as_deref()
			.filter(|title| !title.trim().is_empty())
			.map(|title| h1().child(title.to_string()));
		let mut content: Node = article()
			.child(heading)
			.children(self.body.iter().map(|text| p().child(text.clone())));
		for style in &self.styles {
			content = style
				.family
				.modification(&style.params)
				.on(style.modifiers.iter().cloned())
				.apply_to(content);
		}

		Document::new(self.path.clone(), metadata, content)
	}
}

/// Everything needed to build a site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Site metadata defaults
	pub site: Metadata,
	/// Directory the build writes into
	pub output_dir: PathBuf,
	/// Minify rendered pages
	pub minify: bool,
	/// Page chrome
	pub layout: Option<Layout>,
	/// Theme emitted into every page head
	pub theme: Option<Theme>,
	/// Stylesheet URLs
	pub stylesheets: Vec<String>,
	/// Script URLs
	pub scripts: Vec<String>,
	/// Navigation routes
	pub navigation: Vec<Route>,
	/// Extra sitemap routes
	pub sitemap: Vec<Route>,
	/// Robots rules
	pub robots: Vec<RobotsRule>,
	/// Pages
	pub pages: Vec<PageConfig>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			site: Metadata::default(),
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			minify: false,
			layout: None,
			theme: None,
			stylesheets: Vec::new(),
			scripts: Vec::new(),
			navigation: Vec::new(),
			sitemap: Vec::new(),
			robots: Vec::new(),
			pages: Vec::new(),
		}
	}
}

impl SiteConfig {
	/// Reads `path`, applies environment overrides and validates.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let mut config: SiteConfig = toml::from_str(&text)?;
		config.apply_env_overrides();
		config.validate()?;
		tracing::info!(path = %path.display(), pages = config.pages.len(), "configuration loaded");
		Ok(config)
	}

	/// Parses and validates TOML without consulting the environment.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let config: SiteConfig = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Applies `WEFT_OUTPUT_DIR` and `WEFT_BASE_URL` from the process
	/// environment.
	pub fn apply_env_overrides(&mut self) {
		self.apply_overrides(|name| std::env::var(name).ok());
	}

	/// Applies overrides from `lookup`, which receives full variable names.
	pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
		let var = |key: &str| {
			lookup(&format!("{ENV_PREFIX}{key}")).filter(|value| !value.trim().is_empty())
		};
		if let Some(dir) = var("OUTPUT_DIR") {
			tracing::debug!(output_dir = %dir, "output directory overridden from environment");
			self.output_dir = PathBuf::from(dir);
		}
		if let Some(url) = var("BASE_URL") {
			tracing::debug!(base_url = %url, "base URL overridden from environment");
			self.site.base_url = Some(url);
		}
	}

	/// Checks values that parse but cannot build a coherent site.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if let Some(base_url) = &self.site.base_url
			&& !(base_url.starts_with("http://") || base_url.starts_with("https://"))
		{
			return Err(ConfigError::Invalid(format!(
				"base_url must start with http:// or https://, got {base_url:?}"
			)));
		}

		let mut outputs = HashSet::new();
		for page in &self.pages {
			if crate::route::is_external(&page.path) {
				return Err(ConfigError::Invalid(format!(
					"page path {:?} is an absolute URL",
					page.path
				)));
			}
			let output = output_path(&page.path);
			if !outputs.insert(output.clone()) {
				return Err(ConfigError::Invalid(format!(
					"several pages write {output}"
				)));
			}
		}
		Ok(())
	}

	/// Rendering options for every page.
	pub fn document_options(&self) -> DocumentOptions {
		DocumentOptions {
			minify: self.minify,
			theme: self.theme.clone(),
			stylesheets: self.stylesheets.clone(),
			scripts: self.scripts.clone(),
			layout: self.layout.clone(),
		}
	}

	/// Assembles the website.
	pub fn to_website(&self) -> Website {
		Website::new(self.site.clone())
			.documents(self.pages.iter().map(PageConfig::to_document))
			.navigation(self.navigation.clone())
			.sitemap_routes(self.sitemap.clone())
			.robots(self.robots.clone())
			.options(self.document_options())
	}
}
