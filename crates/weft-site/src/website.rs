//! Static site builds
//!
//! A [`Website`] owns site metadata, its documents and the routes used for the
//! auxiliary files. [`Website::build`] runs in three steps:
//!
//! 1. render every document in parallel
//! 2. write the pages in document order
//! 3. write `sitemap.xml` (only with a base URL) and `robots.txt`
//!
//! Auxiliary files are derived from the complete route set, so they are only
//! computed once every page has been rendered.

use crate::document::{Document, DocumentOptions};
use crate::error::{BuildError, Result};
use crate::metadata::{Metadata, join_url};
use crate::output::OutputTarget;
use crate::robots::{RobotsRule, robots_txt};
use crate::route::Route;
use crate::sitemap::Sitemap;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::collections::HashSet;

/// File name of the generated sitemap.
pub const SITEMAP_FILE: &str = "sitemap.xml";
/// File name of the generated robots file.
pub const ROBOTS_FILE: &str = "robots.txt";

/// What to do when an artifact cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildPolicy {
	/// Stop at the first failure and return it.
	#[default]
	FailFast,
	/// Write everything possible, then report every failure as one
	/// [`BuildError::Partial`].
	KeepGoing,
}

/// Kind of a written artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
	/// Rendered document
	Page,
	/// `sitemap.xml`
	Sitemap,
	/// `robots.txt`
	Robots,
}

/// A file written by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
	/// Path below the output root
	pub path: String,
	/// What the file is
	pub kind: ArtifactKind,
	/// Size in bytes
	pub bytes: usize,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
	/// Written artifacts in write order
	pub artifacts: Vec<Artifact>,
}

impl BuildReport {
	/// Paths of every written artifact.
	pub fn paths(&self) -> Vec<&str> {
		self.artifacts.iter().map(|a| a.path.as_str()).collect()
	}

	/// Number of written pages.
	pub fn page_count(&self) -> usize {
		self.artifacts
			.iter()
			.filter(|a| a.kind == ArtifactKind::Page)
			.count()
	}
}

/// A site: metadata defaults, documents and auxiliary-file settings.
#[derive(Debug, Clone, Default)]
pub struct Website {
	metadata: Metadata,
	documents: Vec<Document>,
	navigation: Vec<Route>,
	sitemap_routes: Vec<Route>,
	robots: Vec<RobotsRule>,
	options: DocumentOptions,
	policy: BuildPolicy,
	lastmod: Option<DateTime<Utc>>,
}

impl Website {
	/// Site with `metadata` as defaults for every document.
	pub fn new(metadata: Metadata) -> Self {
		Self {
			metadata,
			..Self::default()
		}
	}

	/// Adds a document.
	pub fn document(mut self, document: Document) -> Self {
		self.documents.push(document);
		self
	}

	/// Adds several documents.
	pub fn documents(mut self, documents: impl IntoIterator<Item = Document>) -> Self {
		self.documents.extend(documents);
		self
	}

	/// Navigation routes. They are listed first in the sitemap and, when the
	/// layout has no links of its own, shown in the header and footer.
	pub fn navigation(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
		self.navigation = routes.into_iter().collect();
		self
	}

	/// Extra routes listed in the sitemap after the navigation.
	pub fn sitemap_routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
		self.sitemap_routes = routes.into_iter().collect();
		self
	}

	/// Robots rules; none means allow everything.
	pub fn robots(mut self, rules: impl IntoIterator<Item = RobotsRule>) -> Self {
		self.robots = rules.into_iter().collect();
		self
	}

	/// Document rendering options.
	pub fn options(mut self, options: DocumentOptions) -> Self {
		self.options = options;
		self
	}

	/// Failure policy.
	pub fn policy(mut self, policy: BuildPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Modification time stamped on sitemap entries.
	pub fn lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
		self.lastmod = Some(lastmod);
		self
	}

	/// Site metadata.
	pub fn metadata(&self) -> &Metadata {
		&self.metadata
	}

	/// Documents in build order.
	pub fn pages(&self) -> &[Document] {
		&self.documents
	}

	/// `(path, output file)` for every document.
	pub fn routes(&self) -> Vec<(String, String)> {
		self.documents
			.iter()
			.map(|doc| (format!("/{}", doc.path()), doc.output_path()))
			.collect()
	}

	/// Sitemap from navigation followed by the extra routes, or `None`
	/// without a base URL.
	pub fn sitemap(&self) -> Option<Sitemap> {
		let base_url = self.base_url()?;
		Some(Sitemap::from_routes(
			base_url,
			self.navigation.iter().chain(&self.sitemap_routes),
			self.lastmod,
		))
	}

	/// Number of site routes left out because no sitemap can be written.
	///
	/// Zero when a base URL is set. External routes never count.
	pub fn unlisted_routes(&self) -> usize {
		if self.base_url().is_some() {
			return 0;
		}
		self.navigation
			.iter()
			.chain(&self.sitemap_routes)
			.filter(|route| !route.is_external())
			.count()
	}

	/// Serialized sitemap, or `None` without a base URL.
	pub fn sitemap_xml(&self) -> Option<String> {
		self.sitemap().map(|sitemap| sitemap.to_xml())
	}

	/// Serialized robots file.
	pub fn robots_txt(&self) -> String {
		let sitemap_url = self.base_url().map(|base| join_url(base, SITEMAP_FILE));
		robots_txt(&self.robots, sitemap_url.as_deref())
	}

	fn base_url(&self) -> Option<&str> {
		self.metadata
			.base_url
			.as_deref()
			.map(str::trim)
			.filter(|url| !url.is_empty())
	}

	/// Options with the site navigation filled into an empty layout.
	fn effective_options(&self) -> DocumentOptions {
		let mut options = self.options.clone();
		if let Some(layout) = &mut options.layout
			&& layout.navigation.is_empty()
		{
			layout.navigation = self.navigation.clone();
		}
		options
	}

	/// Renders every document and writes all artifacts to `output`.
	pub fn build(&self, output: &dyn OutputTarget) -> Result<BuildReport> {
		tracing::info!(documents = self.documents.len(), policy = ?self.policy, "building site");

		let options = self.effective_options();
		let rendered: Vec<(String, String)> = self
			.documents
			.par_iter()
			.map(|doc| (doc.output_path(), doc.render(&self.metadata, &options)))
			.collect();

		let mut seen = HashSet::new();
		for (path, _) in &rendered {
			if !seen.insert(path.as_str()) {
				tracing::warn!(path = %path, "several documents map to the same output; the last one wins");
			}
		}

		let mut writer = ArtifactWriter {
			output,
			policy: self.policy,
			report: BuildReport::default(),
			failures: Vec::new(),
		};
		for (path, html) in &rendered {
			writer.write(path, html, ArtifactKind::Page)?;
		}
		if let Some(xml) = self.sitemap_xml() {
			writer.write(SITEMAP_FILE, &xml, ArtifactKind::Sitemap)?;
		} else {
			match self.unlisted_routes() {
				0 => tracing::debug!("no base URL configured; sitemap skipped"),
				routes => tracing::warn!(
					routes,
					"no base URL configured; sitemap skipped and its routes are not published"
				),
			}
		}
		writer.write(ROBOTS_FILE, &self.robots_txt(), ArtifactKind::Robots)?;

		writer.finish()
	}
}

struct ArtifactWriter<'a> {
	output: &'a dyn OutputTarget,
	policy: BuildPolicy,
	report: BuildReport,
	failures: Vec<BuildError>,
}

impl ArtifactWriter<'_> {
	fn write(&mut self, path: &str, contents: &str, kind: ArtifactKind) -> Result<()> {
		match self.output.write(path, contents.as_bytes()) {
			Ok(()) => {
				self.report.artifacts.push(Artifact {
					path: path.to_string(),
					kind,
					bytes: contents.len(),
				});
				Ok(())
			}
			Err(err) => match self.policy {
				BuildPolicy::FailFast => Err(err),
				BuildPolicy::KeepGoing => {
					tracing::warn!(path, error = %err, "artifact failed; continuing");
					self.failures.push(err);
					Ok(())
				}
			},
		}
	}

	fn finish(self) -> Result<BuildReport> {
		if self.failures.is_empty() {
			tracing::info!(artifacts = self.report.artifacts.len(), "site built");
			Ok(self.report)
		} else {
			Err(BuildError::Partial {
				failures: self.failures,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::output::MemoryOutput;
	use pretty_assertions::assert_eq;
	use rstest::{fixture, rstest};
	use weft_markup::elements::p;

	#[fixture]
	fn site() -> Website {
		Website::new(Metadata::new().site_name("Site").base_url("https://example.com"))
			.document(Document::new("", Metadata::new(), p().child("home")))
			.document(Document::new("about", Metadata::new().title("About"), p().child("about")))
			.navigation([Route::new("Home", ""), Route::new("About", "about")])
			.sitemap_routes([Route::new("Feed", "feed.xml")])
	}

	#[rstest]
	fn test_build_writes_pages_then_auxiliary(site: Website) {
		let output = MemoryOutput::new();
		let report = site.build(&output).unwrap();
		assert_eq!(
			report.paths(),
			vec!["index.html", "about.html", "sitemap.xml", "robots.txt"]
		);
		assert_eq!(report.page_count(), 2);
		assert!(
			output
				.get("about.html")
				.unwrap()
				.contains("<title>About | Site</title>")
		);
	}

	#[rstest]
	fn test_robots_links_sitemap(site: Website) {
		assert_eq!(
			site.robots_txt(),
			"User-agent: *\nAllow: /\n\nSitemap: https://example.com/sitemap.xml\n"
		);
	}

	#[rstest]
	fn test_no_base_url_no_sitemap() {
		let site = Website::new(Metadata::new()).document(Document::new("", Metadata::new(), p()));
		let output = MemoryOutput::new();
		site.build(&output).unwrap();
		assert_eq!(output.paths(), vec!["index.html", "robots.txt"]);
		assert_eq!(output.get("robots.txt").as_deref(), Some("User-agent: *\nAllow: /\n"));
	}

	#[rstest]
	fn test_unlisted_routes_without_base_url() {
		let site = Website::new(Metadata::new()).navigation([
			Route::new("Home", ""),
			Route::new("About", "about"),
			Route::new("Repo", "https://example.org/repo"),
		]);
		assert_eq!(site.sitemap(), None);
		assert_eq!(site.unlisted_routes(), 2);
		assert_eq!(Website::new(Metadata::new()).unlisted_routes(), 0);
	}

	#[rstest]
	fn test_no_unlisted_routes_with_base_url(site: Website) {
		assert!(site.sitemap().is_some());
		assert_eq!(site.unlisted_routes(), 0);
	}

	#[rstest]
	fn test_routes_table(site: Website) {
		assert_eq!(
			site.routes(),
			vec![
				("/".to_string(), "index.html".to_string()),
				("/about".to_string(), "about.html".to_string()),
			]
		);
	}

	#[rstest]
	fn test_layout_inherits_navigation(site: Website) {
		let site = site.options(DocumentOptions::new().layout(crate::layout::Layout::new()));
		let output = MemoryOutput::new();
		site.build(&output).unwrap();
		assert!(
			output
				.get("index.html")
				.unwrap()
				.contains(r#"<li><a href="/about">About</a></li>"#)
		);
	}
}
