//! XML sitemap generation
//!
//! Entries follow the sitemaps.org protocol: `<loc>` is required, while
//! `<lastmod>`, `<changefreq>` and `<priority>` are emitted only when set.

use crate::metadata::join_url;
use crate::route::{Route, normalize_path};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt::Write;
use weft_markup::escape::escape_text;

/// XML namespace of the `urlset` element.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
	/// Changes on every access
	Always,
	/// Hourly
	Hourly,
	/// Daily
	Daily,
	/// Weekly
	Weekly,
	/// Monthly
	Monthly,
	/// Yearly
	Yearly,
	/// Archived
	Never,
}

impl ChangeFrequency {
	/// Protocol value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Always => "always",
			Self::Hourly => "hourly",
			Self::Daily => "daily",
			Self::Weekly => "weekly",
			Self::Monthly => "monthly",
			Self::Yearly => "yearly",
			Self::Never => "never",
		}
	}
}

/// Relative priority between 0.0 and 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(f32);

impl Priority {
	/// Creates a priority, clamping to `0.0..=1.0`. NaN becomes the default.
	pub fn new(value: f32) -> Self {
		if value.is_nan() {
			return Self::default();
		}
		Self(value.clamp(0.0, 1.0))
	}

	/// The priority value
	pub fn value(&self) -> f32 {
		self.0
	}
}

impl Default for Priority {
	fn default() -> Self {
		Self(0.5)
	}
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
	/// Absolute URL
	pub loc: String,
	/// Last modification time
	pub lastmod: Option<DateTime<Utc>>,
	/// Change frequency hint
	pub changefreq: Option<ChangeFrequency>,
	/// Priority hint
	pub priority: Option<Priority>,
}

impl SitemapEntry {
	/// Entry for `loc` with no hints.
	pub fn new(loc: impl Into<String>) -> Self {
		Self {
			loc: loc.into(),
			lastmod: None,
			changefreq: None,
			priority: None,
		}
	}

	/// Sets the last modification time.
	pub fn with_lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
		self.lastmod = Some(lastmod);
		self
	}

	/// Sets the change frequency.
	pub fn with_changefreq(mut self, changefreq: ChangeFrequency) -> Self {
		self.changefreq = Some(changefreq);
		self
	}

	/// Sets the priority.
	pub fn with_priority(mut self, priority: Priority) -> Self {
		self.priority = Some(priority);
		self
	}

	fn write_xml(&self, out: &mut String) {
		out.push_str("  <url>\n");
		let _ = writeln!(out, "    <loc>{}</loc>", escape_text(&self.loc));
		if let Some(lastmod) = self.lastmod {
			let _ = writeln!(out, "    <lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d"));
		}
		if let Some(changefreq) = self.changefreq {
			let _ = writeln!(out, "    <changefreq>{}</changefreq>", changefreq.as_str());
		}
		if let Some(priority) = self.priority {
			let _ = writeln!(out, "    <priority>{:.1}</priority>", priority.value());
		}
		out.push_str("  </url>\n");
	}
}

/// A complete `urlset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
	/// Entries in document order
	pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
	/// Empty sitemap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an entry.
	pub fn push(&mut self, entry: SitemapEntry) {
		self.entries.push(entry);
	}

	/// Builds a sitemap from routes, first occurrence of each path winning.
	///
	/// External routes are skipped. Every entry gets `lastmod` when given.
	pub fn from_routes<'a>(
		base_url: &str,
		routes: impl IntoIterator<Item = &'a Route>,
		lastmod: Option<DateTime<Utc>>,
	) -> Self {
		let mut seen = HashSet::new();
		let mut sitemap = Self::new();
		for route in routes {
			if route.is_external() {
				tracing::debug!(path = %route.path, "external route left out of sitemap");
				continue;
			}
			let path = normalize_path(&route.path);
			if !seen.insert(path.to_string()) {
				continue;
			}
			let mut entry = SitemapEntry::new(join_url(base_url, path));
			if let Some(lastmod) = lastmod {
				entry = entry.with_lastmod(lastmod);
			}
			sitemap.push(entry);
		}
		sitemap
	}

	/// `loc` values in order.
	pub fn locations(&self) -> Vec<&str> {
		self.entries.iter().map(|e| e.loc.as_str()).collect()
	}

	/// Serializes the sitemap.
	pub fn to_xml(&self) -> String {
		let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
		let _ = writeln!(out, "<urlset xmlns=\"{SITEMAP_NAMESPACE}\">");
		for entry in &self.entries {
			entry.write_xml(&mut out);
		}
		out.push_str("</urlset>\n");
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(0.8, 0.8)]
	#[case(-1.0, 0.0)]
	#[case(3.0, 1.0)]
	#[case(f32::NAN, 0.5)]
	fn test_priority_clamps(#[case] input: f32, #[case] expected: f32) {
		assert_eq!(Priority::new(input).value(), expected);
	}

	#[rstest]
	fn test_from_routes_dedups_in_order() {
		let navigation = [Route::new("A", "a"), Route::new("B", "b")];
		let extra = [Route::new("B again", "/b/"), Route::new("C", "c"), Route::new("Ext", "https://x.org")];
		let sitemap = Sitemap::from_routes("https://example.com", navigation.iter().chain(extra.iter()), None);
		assert_eq!(
			sitemap.locations(),
			vec!["https://example.com/a", "https://example.com/b", "https://example.com/c"]
		);
	}

	#[rstest]
	fn test_to_xml() {
		let lastmod = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
		let mut sitemap = Sitemap::new();
		sitemap.push(
			SitemapEntry::new("https://example.com/?a=1&b=2")
				.with_lastmod(lastmod)
				.with_changefreq(ChangeFrequency::Weekly)
				.with_priority(Priority::new(0.8)),
		);
		assert_eq!(
			sitemap.to_xml(),
			concat!(
				"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
				"<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
				"  <url>\n",
				"    <loc>https://example.com/?a=1&amp;b=2</loc>\n",
				"    <lastmod>2024-05-01</lastmod>\n",
				"    <changefreq>weekly</changefreq>\n",
				"    <priority>0.8</priority>\n",
				"  </url>\n",
				"</urlset>\n",
			)
		);
	}
}
