//! `robots.txt` generation.

use serde::Deserialize;
use std::fmt::Write;

/// Crawl directives for one user agent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RobotsRule {
	/// User agent the block applies to (`*` for all)
	#[serde(default = "default_user_agent")]
	pub user_agent: String,
	/// Allowed path prefixes
	#[serde(default)]
	pub allow: Vec<String>,
	/// Disallowed path prefixes
	#[serde(default)]
	pub disallow: Vec<String>,
	/// Seconds between requests
	#[serde(default)]
	pub crawl_delay: Option<u32>,
}

fn default_user_agent() -> String {
	"*".to_string()
}

impl RobotsRule {
	/// Empty rule for `user_agent`.
	pub fn new(user_agent: impl Into<String>) -> Self {
		Self {
			user_agent: user_agent.into(),
			allow: Vec::new(),
			disallow: Vec::new(),
			crawl_delay: None,
		}
	}

	/// Allows every path for every agent.
	pub fn allow_all() -> Self {
		Self::new("*").allow("/")
	}

	/// Adds an allowed path.
	pub fn allow(mut self, path: impl Into<String>) -> Self {
		self.allow.push(path.into());
		self
	}

	/// Adds a disallowed path.
	pub fn disallow(mut self, path: impl Into<String>) -> Self {
		self.disallow.push(path.into());
		self
	}

	/// Sets the crawl delay.
	pub fn crawl_delay(mut self, seconds: u32) -> Self {
		self.crawl_delay = Some(seconds);
		self
	}

	fn write_block(&self, out: &mut String) {
		let _ = writeln!(out, "User-agent: {}", self.user_agent);
		for path in &self.disallow {
			let _ = writeln!(out, "Disallow: {path}");
		}
		for path in &self.allow {
			let _ = writeln!(out, "Allow: {path}");
		}
		if let Some(delay) = self.crawl_delay {
			let _ = writeln!(out, "Crawl-delay: {delay}");
		}
	}
}

/// Renders `robots.txt`.
///
/// An empty rule set allows everything. Blocks are separated by a blank line
/// and a `Sitemap:` line follows when `sitemap_url` is given.
pub fn robots_txt(rules: &[RobotsRule], sitemap_url: Option<&str>) -> String {
	let default_rules = [RobotsRule::allow_all()];
	let rules = if rules.is_empty() { &default_rules[..] } else { rules };

	let mut out = String::new();
	for (index, rule) in rules.iter().enumerate() {
		if index > 0 {
			out.push('\n');
		}
		rule.write_block(&mut out);
	}
	if let Some(url) = sitemap_url {
		let _ = writeln!(out, "\nSitemap: {url}");
	}
	out
}
