//! Concrete style families.
//!
//! Each family is a unit struct implementing
//! [`StyleOperation`](crate::operation::StyleOperation) with a typed
//! parameter struct. Parameter structs have builder methods, a `Default`
//! carrying the documented defaults, and a
//! [`FromParameterBag`](crate::bag::FromParameterBag) conversion.

mod background;
mod border;
mod font;
mod opacity;
mod radius;
mod shadow;
mod spacing;
mod visibility;

pub use background::{Background, BackgroundParams};
pub use border::{Border, BorderParams, BorderStyle};
pub use font::{
	Font, FontParams, FontSize, FontWeight, TextAlignment, TextDecoration, TextLeading,
	TextTracking,
};
pub use opacity::{Opacity, OpacityParams};
pub use radius::{BorderRadius, RadiusParams, RadiusSize};
pub use shadow::{Shadow, ShadowParams, ShadowSize};
pub use spacing::{Margins, Padding, SpacingParams};
pub use visibility::{Visibility, VisibilityParams};
