//! Weft Style - utility-class style operations
//!
//! Styles are expressed once per family as a [`StyleOperation`] and reach a
//! node through three equivalent paths:
//!
//! - chained methods from [`StyleExt`] on a node,
//! - a [`ResponsiveBuilder`] collecting classes under nested modifier scopes,
//! - free functions in [`dsl`] returning reusable [`Modification`] values.
//!
//! Modifiers (`hover:`, `dark:`, `md:`) combine into one canonical prefix, so
//! the same intent always yields the same class token.
//!
//! ## Example
//!
//! ```
//! use weft_markup::{Markup, elements::div};
//! use weft_style::{Color, Modifier, SpacingParams, StyleExt};
//!
//! let card = div()
//!     .background(Color::White)
//!     .padding(SpacingParams::length(6))
//!     .on([Modifier::Hover], |b| b.background(Color::gray(50)))
//!     .on([Modifier::Dark], |b| b.background(Color::slate(900)));
//!
//! assert_eq!(
//!     card.render(),
//!     r#"<div class="bg-white p-6 hover:bg-gray-50 dark:bg-slate-900"></div>"#
//! );
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod bag;
pub mod breakpoint;
pub mod color;
pub mod dsl;
pub mod edge;
pub mod error;
pub mod ext;
pub mod family;
pub mod modification;
pub mod modifier;
pub mod operation;
pub mod responsive;
pub mod styles;
pub mod theme;

pub use bag::{FromParameterBag, ParameterBag, StyleValue};
pub use breakpoint::{Breakpoint, ResponsiveValue};
pub use color::{Color, Palette};
pub use edge::{Edge, RadiusSide};
pub use error::UnknownToken;
pub use ext::StyleExt;
pub use family::StyleFamily;
pub use modification::Modification;
pub use modifier::{MODIFIER_SEPARATOR, Modifier, ModifierScope};
pub use operation::{StyleOperation, Stylable};
pub use responsive::ResponsiveBuilder;
pub use styles::{
	Background, BackgroundParams, Border, BorderParams, BorderRadius, BorderStyle, Font, FontParams,
	FontSize, FontWeight, Margins, Opacity, OpacityParams, Padding, RadiusParams, RadiusSize, Shadow,
	ShadowParams, ShadowSize, SpacingParams, TextAlignment, TextDecoration, TextLeading, TextTracking,
	Visibility, VisibilityParams,
};
pub use theme::Theme;
