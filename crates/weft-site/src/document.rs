//! Full HTML documents
//!
//! A [`Document`] pairs a site path with page metadata and a root node. Its
//! [`render`](Document::render) produces the complete page:
//!
//! ```text
//! <!DOCTYPE html><html lang="..."><head>...</head><body>...</body></html>
//! ```
//!
//! The head always starts with the charset and viewport declarations, followed
//! by [`Metadata::head_nodes`], stylesheets, the theme block and scripts.

use crate::layout::Layout;
use crate::metadata::Metadata;
use crate::route::{normalize_path, output_path};
use weft_markup::elements::{body, head, html};
use weft_markup::{Markup, Node};
use weft_style::Theme;

/// Inputs larger than this are emitted without minification.
const MINIFY_MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Options shared by every document of a site.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
	/// Collapse whitespace outside preformatted, script and style content
	pub minify: bool,
	/// Theme emitted as an inline `@theme` block
	pub theme: Option<Theme>,
	/// Stylesheet URLs, in order
	pub stylesheets: Vec<String>,
	/// Script URLs, loaded with `defer`
	pub scripts: Vec<String>,
	/// Chrome wrapped around the body content
	pub layout: Option<Layout>,
}

impl DocumentOptions {
	/// Default options: no chrome, no assets, no minification.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables or disables minification.
	pub fn minify(mut self, minify: bool) -> Self {
		self.minify = minify;
		self
	}

	/// Sets the theme.
	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Adds a stylesheet.
	pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
		self.stylesheets.push(href.into());
		self
	}

	/// Adds a script.
	pub fn script(mut self, src: impl Into<String>) -> Self {
		self.scripts.push(src.into());
		self
	}

	/// Sets the layout.
	pub fn layout(mut self, layout: Layout) -> Self {
		self.layout = Some(layout);
		self
	}
}

/// One page of a site.
#[derive(Debug, Clone)]
pub struct Document {
	path: String,
	metadata: Metadata,
	content: Node,
}

impl Document {
	/// Document at `path` (site-relative, `""` for the home page).
	pub fn new(path: impl Into<String>, metadata: Metadata, content: Node) -> Self {
		Self {
			path: path.into(),
			metadata,
			content,
		}
	}

	/// Normalized site path.
	pub fn path(&self) -> &str {
		normalize_path(&self.path)
	}

	/// Page metadata, before merging with site defaults.
	pub fn metadata(&self) -> &Metadata {
		&self.metadata
	}

	/// Root content node.
	pub fn content(&self) -> &Node {
		&self.content
	}

	/// Relative output file, e.g. `blog/post.html`.
	pub fn output_path(&self) -> String {
		output_path(&self.path)
	}

	/// Renders the complete document with `site` as metadata defaults.
	pub fn render(&self, site: &Metadata, options: &DocumentOptions) -> String {
		let metadata = Metadata::merged(site, &self.metadata);

		let mut head_children = vec![
			Node::element("meta").attr("charset", "UTF-8"),
			Node::element("meta")
				.attr("name", "viewport")
				.attr("content", "width=device-width, initial-scale=1"),
		];
		head_children.extend(metadata.head_nodes(self.path()));
		head_children.extend(
			options
				.stylesheets
				.iter()
				.map(|href| Node::element("link").attr("rel", "stylesheet").attr("href", href.clone())),
		);
		if let Some(theme) = &options.theme {
			head_children.push(
				Node::element("style")
					.attr("type", "text/tailwindcss")
					.child(Node::raw(theme.to_css())),
			);
		}
		head_children.extend(
			options
				.scripts
				.iter()
				.map(|src| Node::element("script").attr("src", src.clone()).bool_attr("defer")),
		);

		let content = match &options.layout {
			Some(layout) => layout.wrap(metadata.site_name.as_deref(), self.content.clone()),
			None => self.content.clone(),
		};

		let page = html()
			.attr("lang", metadata.lang().to_string())
			.child(head().children(head_children))
			.child(body().child(content));

		let mut out = String::from("<!DOCTYPE html>");
		page.render_into(&mut out);

		if options.minify { minify_html(&out) } else { out }
	}
}

/// Elements whose content is emitted byte for byte by [`minify_html`].
const PRESERVED_ELEMENTS: [&str; 4] = ["pre", "script", "style", "textarea"];

/// Collapses whitespace runs to one space. The content of `<pre>`,
/// `<script>`, `<style>` and `<textarea>` is left untouched.
///
/// Inputs over 1 MiB are returned as is.
pub fn minify_html(input: &str) -> String {
	if input.len() > MINIFY_MAX_INPUT_SIZE {
		return input.to_string();
	}

	let mut out = String::with_capacity(input.len());
	let mut rest = input;
	while let Some((start, tag)) = find_preserved_open(rest) {
		collapse_into(&mut out, &rest[..start]);
		let block = &rest[start..];
		let close = format!("</{tag}>");
		let end = block.find(&close).map_or(block.len(), |i| i + close.len());
		out.push_str(&block[..end]);
		rest = &block[end..];
	}
	collapse_into(&mut out, rest);
	out
}

/// Earliest preserved start tag (`<script>` or `<script ...>`) and its name.
fn find_preserved_open(html: &str) -> Option<(usize, &'static str)> {
	PRESERVED_ELEMENTS
		.iter()
		.filter_map(|tag| find_open_tag(html, tag).map(|start| (start, *tag)))
		.min_by_key(|(start, _)| *start)
}

fn find_open_tag(html: &str, tag: &str) -> Option<usize> {
	let needle = format!("<{tag}");
	let mut offset = 0;
	while let Some(found) = html[offset..].find(&needle) {
		let start = offset + found;
		let after = &html[start + needle.len()..];
		if after.is_empty()
			|| after.starts_with(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace())
		{
			return Some(start);
		}
		offset = start + needle.len();
	}
	None
}

fn collapse_into(out: &mut String, segment: &str) {
	let mut in_whitespace = out.ends_with(' ');
	for c in segment.chars() {
		if c.is_whitespace() {
			if !in_whitespace {
				out.push(' ');
				in_whitespace = true;
			}
		} else {
			out.push(c);
			in_whitespace = false;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layout::FooterVariant;
	use crate::route::Route;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use weft_markup::elements::{p, pre, script};

	fn site() -> Metadata {
		Metadata::new().site_name("Great Site").locale("en-GB")
	}

	#[rstest]
	fn test_document_skeleton() {
		let doc = Document::new("", Metadata::new().title("Hello, world!"), p().child("Hi"));
		assert_eq!(
			doc.render(&site(), &DocumentOptions::new()),
			concat!(
				"<!DOCTYPE html><html lang=\"en-GB\"><head>",
				"<meta charset=\"UTF-8\" />",
				"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />",
				"<title>Hello, world! | Great Site</title>",
				"<meta property=\"og:title\" content=\"Hello, world! | Great Site\" />",
				"<meta property=\"og:type\" content=\"website\" />",
				"<meta property=\"og:site_name\" content=\"Great Site\" />",
				"<meta property=\"og:locale\" content=\"en_GB\" />",
				"</head><body><p>Hi</p></body></html>",
			)
		);
	}

	#[rstest]
	fn test_assets_and_layout() {
		let options = DocumentOptions::new()
			.stylesheet("/site.css")
			.script("/app.js")
			.layout(
				Layout::new()
					.footer(FooterVariant::None)
					.navigation([Route::new("About", "about")]),
			);
		let html = Document::new("about", Metadata::new(), p().child("Body")).render(&site(), &options);
		assert!(html.contains(r#"<link rel="stylesheet" href="/site.css" />"#));
		assert!(html.contains(r#"<script src="/app.js" defer></script></head>"#));
		assert!(html.contains(
			r#"<body><header><a href="/">Great Site</a><nav aria-label="Main"><ul><li><a href="/about">About</a></li></ul></nav></header><main><p>Body</p></main></body>"#
		));
	}

	#[rstest]
	fn test_theme_block_is_raw() {
		let options = DocumentOptions::new().theme(Theme::default_theme());
		let html = Document::new("", Metadata::new(), p()).render(&Metadata::new(), &options);
		assert!(html.contains("<style type=\"text/tailwindcss\">@theme {"));
	}

	#[rstest]
	fn test_output_path() {
		let doc = Document::new("/blog/post/", Metadata::new(), p());
		assert_eq!(doc.path(), "blog/post");
		assert_eq!(doc.output_path(), "blog/post.html");
	}

	#[rstest]
	#[case("<p>a   b\n\tc</p>", "<p>a b c</p>")]
	#[case("<pre>  keep\n  this </pre> <p>x  y</p>", "<pre>  keep\n  this </pre> <p>x y</p>")]
	#[case("<pre class=\"code\">a  b</pre>", "<pre class=\"code\">a  b</pre>")]
	#[case("<prefix>a  b</prefix>", "<prefix>a b</prefix>")]
	#[case("<p>a  b</p><script>// c\nrun()</script>", "<p>a b</p><script>// c\nrun()</script>")]
	#[case("<style>a {\n  color: red;\n}</style>  <p> x </p>", "<style>a {\n  color: red;\n}</style> <p> x </p>")]
	#[case("<textarea name=\"t\">line\n\n  two</textarea>", "<textarea name=\"t\">line\n\n  two</textarea>")]
	#[case("<scripts>a  b</scripts>", "<scripts>a b</scripts>")]
	fn test_minify(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(minify_html(input), expected);
	}

	#[rstest]
	fn test_minify_document() {
		let doc = Document::new("", Metadata::new(), Node::fragment([p().child("a    b"), pre().child("x    y")]));
		let html = doc.render(&Metadata::new(), &DocumentOptions::new().minify(true));
		assert!(html.ends_with("<body><p>a b</p><pre>x    y</pre></body></html>"));
	}

	#[rstest]
	fn test_minify_keeps_inline_script_lines() {
		let doc = Document::new("", Metadata::new(), script("// greet\nconsole.log('hi');"));
		let html = doc.render(&Metadata::new(), &DocumentOptions::new().minify(true));
		assert!(html.contains("<script>// greet\nconsole.log('hi');</script>"));
	}

	#[rstest]
	fn test_minify_skips_large_input() {
		let input = "a  ".repeat(MINIFY_MAX_INPUT_SIZE);
		assert_eq!(minify_html(&input).len(), input.len());
	}
}
