//! Weft Site - documents, auxiliary files and static builds
//!
//! - [`metadata`]: site and page metadata, merged into `<head>` elements
//! - [`route`] and [`layout`]: navigation links and page chrome
//! - [`document`]: a complete HTML page from metadata plus a root node
//! - [`sitemap`] and [`robots`]: the crawler-facing files
//! - [`website`]: the parallel build pipeline and its failure policy
//! - [`output`]: file system and in-memory artifact targets
//! - [`config`]: TOML site descriptions with `WEFT_` environment overrides
//!
//! ## Example
//!
//! ```
//! use weft_markup::elements::p;
//! use weft_site::{Document, MemoryOutput, Metadata, Website};
//!
//! let site = Website::new(Metadata::new().site_name("Great Site"))
//!     .document(Document::new("", Metadata::new().title("Home"), p().child("Hi")));
//!
//! let output = MemoryOutput::new();
//! let report = site.build(&output).unwrap();
//!
//! assert_eq!(report.paths(), vec!["index.html", "robots.txt"]);
//! assert!(output.get("index.html").unwrap().starts_with("<!DOCTYPE html>"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod metadata;
pub mod output;
pub mod robots;
pub mod route;
pub mod sitemap;
pub mod website;

pub use config::{PageConfig, SiteConfig, StyleConfig};
pub use document::{Document, DocumentOptions, minify_html};
pub use error::{BuildError, ConfigError, Result};
pub use layout::{FooterVariant, HeaderVariant, Layout};
pub use metadata::{ContentType, Favicon, Locale, Metadata, ThemeColor};
pub use output::{FileSystemOutput, MemoryOutput, OutputTarget};
pub use robots::{RobotsRule, robots_txt};
pub use route::{Route, output_path};
pub use sitemap::{ChangeFrequency, Priority, Sitemap, SitemapEntry};
pub use website::{Artifact, ArtifactKind, BuildPolicy, BuildReport, Website};
