//! # Weft
//!
//! Declarative HTML composition with utility-class styling and static site
//! builds.
//!
//! Pages are trees of [`Node`] values. Styles are typed operations that append
//! utility classes to a node, optionally under modifiers such as `hover:` or
//! `md:`. A [`Website`] turns documents into HTML files plus `sitemap.xml` and
//! `robots.txt`.
//!
//! ## Feature Flags
//!
//! - `site` (default) - documents, website builds and TOML configuration
//! - `minimal` - markup and style engines only, no file system access
//!
//! ## Example
//!
//! ```
//! use weft::prelude::*;
//!
//! let card = div()
//!     .class("card")
//!     .padding(SpacingParams::length(6))
//!     .on([Modifier::Hover], |b| b.background(Color::gray(50)))
//!     .child(h2().child("Title"))
//!     .child(p().child("Body"));
//!
//! assert_eq!(
//!     card.render(),
//!     r#"<div class="card p-6 hover:bg-gray-50"><h2>Title</h2><p>Body</p></div>"#
//! );
//! ```

#![warn(missing_docs)]

/// Node model and HTML serialization
pub use weft_markup as markup;
/// Utility-class style operations
pub use weft_style as style;
/// Documents, auxiliary files and static builds
#[cfg(feature = "site")]
pub use weft_site as site;

pub use weft_markup::{ClassName, IntoNode, Markup, Node};
pub use weft_style::{Modification, Modifier, StyleExt, StyleOperation};

#[cfg(feature = "site")]
pub use weft_site::{Document, Metadata, Website};

/// Common imports for building pages.
pub mod prelude {
	pub use weft_markup::elements::*;
	pub use weft_markup::{AriaRole, ClassName, IntoNode, Markup, Node};

	pub use weft_style::dsl;
	pub use weft_style::{
		BorderParams, Breakpoint, Color, Edge, FontParams, Modification, Modifier, ParameterBag,
		RadiusParams, ResponsiveBuilder, ShadowParams, SpacingParams, StyleExt, StyleFamily,
		StyleOperation, Stylable, Theme,
	};

	#[cfg(feature = "site")]
	pub use weft_site::{
		BuildPolicy, Document, DocumentOptions, FileSystemOutput, Layout, MemoryOutput, Metadata,
		OutputTarget, RobotsRule, Route, SiteConfig, Website,
	};
}
