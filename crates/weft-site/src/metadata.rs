//! Page and site metadata
//!
//! A site carries one [`Metadata`] with defaults; each document may carry its
//! own, and [`Metadata::merged`] combines them field by field with the page
//! value winning. The merged value produces the `<head>` elements.

use serde::Deserialize;
use std::fmt;
use weft_markup::Node;

/// Separator used between page title and site name when none is configured.
pub const DEFAULT_TITLE_SEPARATOR: &str = " | ";

/// BCP-47 style language tag, e.g. `en` or `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct Locale(String);

impl Locale {
	/// Creates a locale, normalizing `_` to `-`.
	pub fn new(tag: impl Into<String>) -> Self {
		Self(tag.into().trim().replace('_', "-"))
	}

	/// Tag for the `lang` attribute.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Primary language subtag (`en` for `en-US`).
	pub fn language(&self) -> &str {
		self.0.split('-').next().unwrap_or(&self.0)
	}

	/// Open Graph form with an underscore (`en_US`).
	pub fn og_locale(&self) -> String {
		self.0.replace('-', "_")
	}
}

impl Default for Locale {
	fn default() -> Self {
		Self::new("en")
	}
}

impl From<String> for Locale {
	fn from(tag: String) -> Self {
		Self::new(tag)
	}
}

impl From<&str> for Locale {
	fn from(tag: &str) -> Self {
		Self::new(tag)
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Browser UI color, optionally with a dark-scheme variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColor {
	/// Color for the light scheme (or both, without `dark`)
	pub light: String,
	/// Color for the dark scheme
	#[serde(default)]
	pub dark: Option<String>,
}

impl ThemeColor {
	/// One color for both schemes.
	pub fn new(light: impl Into<String>) -> Self {
		Self {
			light: light.into(),
			dark: None,
		}
	}

	/// Sets the dark-scheme color.
	pub fn dark(mut self, dark: impl Into<String>) -> Self {
		self.dark = Some(dark.into());
		self
	}

	fn meta_tags(&self) -> Vec<Node> {
		match &self.dark {
			None => vec![meta_name("theme-color", &self.light)],
			Some(dark) => vec![
				meta_name("theme-color", &self.light).attr("media", "(prefers-color-scheme: light)"),
				meta_name("theme-color", dark).attr("media", "(prefers-color-scheme: dark)"),
			],
		}
	}
}

/// A `<link rel="icon">` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Favicon {
	/// Icon URL
	pub href: String,
	/// MIME type, e.g. `image/png`
	#[serde(default, rename = "type")]
	pub mime_type: Option<String>,
	/// Sizes, e.g. `32x32`
	#[serde(default)]
	pub sizes: Option<String>,
}

impl Favicon {
	/// Icon at `href`; the MIME type is guessed from the extension.
	pub fn new(href: impl Into<String>) -> Self {
		let href = href.into();
		let mime_type = guess_icon_type(&href).map(str::to_string);
		Self {
			href,
			mime_type,
			sizes: None,
		}
	}

	/// Sets the sizes attribute.
	pub fn sizes(mut self, sizes: impl Into<String>) -> Self {
		self.sizes = Some(sizes.into());
		self
	}

	fn link_tag(&self) -> Node {
		let mut node = Node::element("link").attr("rel", "icon");
		if let Some(mime_type) = &self.mime_type {
			node = node.attr("type", mime_type.clone());
		}
		if let Some(sizes) = &self.sizes {
			node = node.attr("sizes", sizes.clone());
		}
		node.attr("href", self.href.clone())
	}
}

fn guess_icon_type(href: &str) -> Option<&'static str> {
	let extension = href.rsplit('.').next()?.to_ascii_lowercase();
	match extension.as_str() {
		"ico" => Some("image/x-icon"),
		"png" => Some("image/png"),
		"svg" => Some("image/svg+xml"),
		"gif" => Some("image/gif"),
		"webp" => Some("image/webp"),
		_ => None,
	}
}

/// Open Graph content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
	/// `website`
	#[default]
	Website,
	/// `article`
	Article,
	/// `profile`
	Profile,
	/// `book`
	Book,
}

impl ContentType {
	/// `og:type` value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Website => "website",
			Self::Article => "article",
			Self::Profile => "profile",
			Self::Book => "book",
		}
	}
}

/// Document metadata. Every field is optional so that page values can be
/// layered over site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
	/// Site name, appended to page titles
	pub site_name: Option<String>,
	/// Page title
	pub title: Option<String>,
	/// Separator between title and site name
	pub title_separator: Option<String>,
	/// Description
	pub description: Option<String>,
	/// Document language
	pub locale: Option<Locale>,
	/// Author
	pub author: Option<String>,
	/// Keywords
	pub keywords: Vec<String>,
	/// Open Graph content type
	pub content_type: Option<ContentType>,
	/// Preview image URL
	pub image: Option<String>,
	/// Browser UI color
	pub theme_color: Option<ThemeColor>,
	/// Icons
	pub favicons: Vec<Favicon>,
	/// Absolute base URL, e.g. `https://example.com`
	pub base_url: Option<String>,
}

impl Metadata {
	/// Empty metadata.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the site name.
	pub fn site_name(mut self, name: impl Into<String>) -> Self {
		self.site_name = Some(name.into());
		self
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the title separator.
	pub fn title_separator(mut self, separator: impl Into<String>) -> Self {
		self.title_separator = Some(separator.into());
		self
	}

	/// Sets the description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Sets the locale.
	pub fn locale(mut self, locale: impl Into<Locale>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	/// Sets the author.
	pub fn author(mut self, author: impl Into<String>) -> Self {
		self.author = Some(author.into());
		self
	}

	/// Replaces the keywords.
	pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.keywords = keywords.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the Open Graph content type.
	pub fn content_type(mut self, content_type: ContentType) -> Self {
		self.content_type = Some(content_type);
		self
	}

	/// Sets the preview image.
	pub fn image(mut self, image: impl Into<String>) -> Self {
		self.image = Some(image.into());
		self
	}

	/// Sets the theme color.
	pub fn theme_color(mut self, theme_color: ThemeColor) -> Self {
		self.theme_color = Some(theme_color);
		self
	}

	/// Adds an icon.
	pub fn favicon(mut self, favicon: Favicon) -> Self {
		self.favicons.push(favicon);
		self
	}

	/// Sets the base URL.
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Layers `page` over `site`: each present page field wins, lists win
	/// when non-empty.
	pub fn merged(site: &Metadata, page: &Metadata) -> Metadata {
		fn pick<T: Clone>(page: &Option<T>, site: &Option<T>) -> Option<T> {
			page.clone().or_else(|| site.clone())
		}
		fn pick_list<T: Clone>(page: &[T], site: &[T]) -> Vec<T> {
			if page.is_empty() { site.to_vec() } else { page.to_vec() }
		}

		Metadata {
			site_name: pick(&page.site_name, &site.site_name),
			title: pick(&page.title, &site.title),
			title_separator: pick(&page.title_separator, &site.title_separator),
			description: pick(&page.description, &site.description),
			locale: pick(&page.locale, &site.locale),
			author: pick(&page.author, &site.author),
			keywords: pick_list(&page.keywords, &site.keywords),
			content_type: pick(&page.content_type, &site.content_type),
			image: pick(&page.image, &site.image),
			theme_color: pick(&page.theme_color, &site.theme_color),
			favicons: pick_list(&page.favicons, &site.favicons),
			base_url: pick(&page.base_url, &site.base_url),
		}
	}

	/// Text of the `<title>` element.
	///
	/// `title + separator + site_name`; either part alone when the other is
	/// missing, and the title alone when it equals the site name.
	pub fn page_title(&self) -> String {
		let separator = self.title_separator.as_deref().unwrap_or(DEFAULT_TITLE_SEPARATOR);
		match (non_blank(&self.title), non_blank(&self.site_name)) {
			(Some(title), Some(site)) if title != site => format!("{title}{separator}{site}"),
			(Some(title), _) => title.to_string(),
			(None, Some(site)) => site.to_string(),
			(None, None) => String::new(),
		}
	}

	/// Language for the `lang` attribute.
	pub fn lang(&self) -> Locale {
		self.locale.clone().unwrap_or_default()
	}

	/// Absolute URL for a site-relative `path`, when a base URL is set.
	pub fn absolute_url(&self, path: &str) -> Option<String> {
		let base = non_blank(&self.base_url)?;
		Some(join_url(base, path))
	}

	/// Head elements after `charset` and `viewport`, in a fixed order:
	/// title, description, author, keywords, Open Graph, theme color,
	/// favicons, canonical link.
	pub fn head_nodes(&self, path: &str) -> Vec<Node> {
		let mut nodes = Vec::new();
		let title = self.page_title();
		if !title.is_empty() {
			nodes.push(Node::element("title").child(Node::text(title.clone())));
		}
		if let Some(description) = non_blank(&self.description) {
			nodes.push(meta_name("description", description));
		}
		if let Some(author) = non_blank(&self.author) {
			nodes.push(meta_name("author", author));
		}
		if !self.keywords.is_empty() {
			nodes.push(meta_name("keywords", &self.keywords.join(", ")));
		}

		if !title.is_empty() {
			nodes.push(meta_property("og:title", &title));
		}
		nodes.push(meta_property("og:type", self.content_type.unwrap_or_default().as_str()));
		if let Some(description) = non_blank(&self.description) {
			nodes.push(meta_property("og:description", description));
		}
		if let Some(site) = non_blank(&self.site_name) {
			nodes.push(meta_property("og:site_name", site));
		}
		if let Some(locale) = &self.locale {
			nodes.push(meta_property("og:locale", &locale.og_locale()));
		}
		if let Some(image) = non_blank(&self.image) {
			nodes.push(meta_property("og:image", image));
		}
		let canonical = self.absolute_url(path);
		if let Some(url) = &canonical {
			nodes.push(meta_property("og:url", url));
		}

		if let Some(theme_color) = &self.theme_color {
			nodes.extend(theme_color.meta_tags());
		}
		nodes.extend(self.favicons.iter().map(Favicon::link_tag));
		if let Some(url) = canonical {
			nodes.push(Node::element("link").attr("rel", "canonical").attr("href", url));
		}
		nodes
	}
}

fn non_blank(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn meta_name(name: &str, content: &str) -> Node {
	Node::element("meta")
		.attr("name", name.to_string())
		.attr("content", content.to_string())
}

fn meta_property(property: &str, content: &str) -> Node {
	Node::element("meta")
		.attr("property", property.to_string())
		.attr("content", content.to_string())
}

/// Joins a base URL and a site-relative path with exactly one slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
	let base = base.trim_end_matches('/');
	let path = path.trim_start_matches('/');
	format!("{base}/{path}")
}
