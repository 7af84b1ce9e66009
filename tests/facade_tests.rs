//! Tests for the `weft` facade and its prelude.

use pretty_assertions::assert_eq;
use rstest::rstest;
use weft::prelude::*;

#[rstest]
fn test_prelude_composes_styled_markup() {
	let hero = section()
		.id("hero")
		.role(AriaRole::Banner)
		.style(&dsl::margins(SpacingParams::default().with_auto(true)))
		.on([Modifier::Breakpoint(Breakpoint::Md), Modifier::Hover], |b| {
			b.background(Color::parse("indigo-700"))
		})
		.child(h1().child("Weft"));

	assert_eq!(
		hero.render(),
		r#"<section id="hero" class="m-auto md:hover:bg-indigo-700" role="banner"><h1>Weft</h1></section>"#
	);
}

#[rstest]
fn test_site_build_through_facade() {
	let dir = tempfile::tempdir().unwrap();
	let site = Website::new(Metadata::new().site_name("Weft").base_url("https://weft.dev"))
		.document(Document::new("", Metadata::new(), p().child("Home")))
		.navigation([Route::new("Home", "")]);

	let report = site.build(&FileSystemOutput::new(dir.path())).unwrap();

	assert_eq!(report.paths(), vec!["index.html", "sitemap.xml", "robots.txt"]);
	let sitemap = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
	assert!(sitemap.contains("<loc>https://weft.dev/</loc>"));
}
