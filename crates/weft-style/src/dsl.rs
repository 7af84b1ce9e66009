//! Free-function style DSL.
//!
//! Every function returns a [`Modification`] built with
//! [`StyleOperation::as_modification`], so the classes match the chained
//! methods exactly. Modifications are plain values: build them once, scope
//! them with [`Modification::on`], and attach them anywhere.
//!
//! ```
//! use weft_markup::{Markup, elements::a};
//! use weft_style::{Color, Modifier, StyleExt, dsl};
//!
//! let link_style = [
//!     dsl::font(dsl::FontParams::new().color(Color::blue(600))),
//!     dsl::font(dsl::FontParams::new().decoration(dsl::TextDecoration::Underline)).on([Modifier::Hover]),
//! ];
//!
//! let link = a().attr("href", "/docs").child("Docs").styles(&link_style);
//! assert_eq!(
//!     link.render(),
//!     r#"<a class="text-blue-600 hover:underline" href="/docs">Docs</a>"#
//! );
//! ```

use crate::color::Color;
use crate::modification::Modification;
use crate::operation::{StyleOperation, Stylable};

pub use crate::styles::{
	BackgroundParams, BorderParams, BorderStyle, FontParams, FontSize, FontWeight, OpacityParams,
	RadiusParams, RadiusSize, ShadowParams, ShadowSize, SpacingParams, TextAlignment,
	TextDecoration, TextLeading, TextTracking, VisibilityParams,
};
use crate::styles::{Background, Border, BorderRadius, Font, Margins, Opacity, Padding, Shadow, Visibility};

/// Modification for any style family.
pub fn style<O: StyleOperation>(params: impl Into<O::Parameters>) -> Modification {
	O::as_modification(&params.into())
}

/// `bg-<color>`
pub fn background(color: impl Into<Color>) -> Modification {
	style::<Background>(BackgroundParams::new(color))
}

/// `m<edge>-<n>`
pub fn margins(params: impl Into<SpacingParams>) -> Modification {
	style::<Margins>(params)
}

/// `p<edge>-<n>`
pub fn padding(params: impl Into<SpacingParams>) -> Modification {
	style::<Padding>(params)
}

/// `border...`
pub fn border(params: impl Into<BorderParams>) -> Modification {
	style::<Border>(params)
}

/// `rounded...`
pub fn rounded(params: impl Into<RadiusParams>) -> Modification {
	style::<BorderRadius>(params)
}

/// `shadow-...`
pub fn shadow(params: impl Into<ShadowParams>) -> Modification {
	style::<Shadow>(params)
}

/// Typography classes.
pub fn font(params: FontParams) -> Modification {
	style::<Font>(params)
}

/// `hidden`
pub fn hidden() -> Modification {
	style::<Visibility>(VisibilityParams::default())
}

/// `opacity-<n>`
pub fn opacity(value: u8) -> Modification {
	style::<Opacity>(OpacityParams::new(value))
}

/// Applies every modification to `target`, in order.
pub fn styled<S: Stylable>(target: S, modifications: &[Modification]) -> S {
	modifications
		.iter()
		.fold(target, |target, modification| modification.apply_to(target))
}
