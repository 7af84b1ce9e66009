use crate::bag::{FromParameterBag, ParameterBag};
use crate::color::Color;
use crate::operation::StyleOperation;
use weft_markup::ClassName;

token_enum! {
	/// Font size, `text-<size>`.
	pub enum FontSize {
		/// `xs`
		Xs => "xs",
		/// `sm`
		Sm => "sm",
		/// `base`
		Base => "base",
		/// `lg`
		Lg => "lg",
		/// `xl`
		Xl => "xl",
		/// `2xl`
		Xl2 => "2xl",
		/// `3xl`
		Xl3 => "3xl",
		/// `4xl`
		Xl4 => "4xl",
		/// `5xl`
		Xl5 => "5xl",
		/// `6xl`
		Xl6 => "6xl",
		/// `7xl`
		Xl7 => "7xl",
		/// `8xl`
		Xl8 => "8xl",
		/// `9xl`
		Xl9 => "9xl",
	}
}

token_enum! {
	/// Font weight, `font-<weight>`.
	pub enum FontWeight {
		/// 100
		Thin => "thin" | "100",
		/// 200
		ExtraLight => "extralight" | "200",
		/// 300
		Light => "light" | "300",
		/// 400
		Normal => "normal" | "400",
		/// 500
		Medium => "medium" | "500",
		/// 600
		SemiBold => "semibold" | "600",
		/// 700
		Bold => "bold" | "700",
		/// 800
		ExtraBold => "extrabold" | "800",
		/// 900
		Black => "black" | "900",
	}
}

token_enum! {
	/// Text alignment, `text-<alignment>`.
	pub enum TextAlignment {
		/// `left`
		Left => "left",
		/// `center`
		Center => "center",
		/// `right`
		Right => "right",
		/// `justify`
		Justify => "justify",
		/// `start`
		Start => "start" | "leading",
		/// `end`
		End => "end" | "trailing",
	}
}

token_enum! {
	/// Letter spacing, `tracking-<step>`.
	pub enum TextTracking {
		/// `tighter`
		Tighter => "tighter",
		/// `tight`
		Tight => "tight",
		/// `normal`
		Normal => "normal",
		/// `wide`
		Wide => "wide",
		/// `wider`
		Wider => "wider",
		/// `widest`
		Widest => "widest",
	}
}

token_enum! {
	/// Line height, `leading-<step>`.
	pub enum TextLeading {
		/// `none`
		None => "none",
		/// `tight`
		Tight => "tight",
		/// `snug`
		Snug => "snug",
		/// `normal`
		Normal => "normal",
		/// `relaxed`
		Relaxed => "relaxed",
		/// `loose`
		Loose => "loose",
	}
}

token_enum! {
	/// Text decoration line, emitted as-is.
	pub enum TextDecoration {
		/// `underline`
		Underline => "underline",
		/// `overline`
		Overline => "overline",
		/// `line-through`
		LineThrough => "line-through" | "strikethrough",
		/// `no-underline`
		NoUnderline => "no-underline" | "none",
	}
}

/// Typography: size, weight, alignment, spacing, decoration, family, color.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font;

/// Parameters for [`Font`]. Every field is optional; an empty set emits
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontParams {
	/// Size
	pub size: Option<FontSize>,
	/// Weight
	pub weight: Option<FontWeight>,
	/// Alignment
	pub alignment: Option<TextAlignment>,
	/// Letter spacing
	pub tracking: Option<TextTracking>,
	/// Line height
	pub leading: Option<TextLeading>,
	/// Decoration line
	pub decoration: Option<TextDecoration>,
	/// Family name (`sans`, `serif`, `mono`, or a theme font)
	pub family: Option<String>,
	/// Text color
	pub color: Option<Color>,
}

impl FontParams {
	/// Empty parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the size.
	pub fn size(mut self, size: FontSize) -> Self {
		self.size = Some(size);
		self
	}

	/// Sets the weight.
	pub fn weight(mut self, weight: FontWeight) -> Self {
		self.weight = Some(weight);
		self
	}

	/// Sets the alignment.
	pub fn alignment(mut self, alignment: TextAlignment) -> Self {
		self.alignment = Some(alignment);
		self
	}

	/// Sets the letter spacing.
	pub fn tracking(mut self, tracking: TextTracking) -> Self {
		self.tracking = Some(tracking);
		self
	}

	/// Sets the line height.
	pub fn leading(mut self, leading: TextLeading) -> Self {
		self.leading = Some(leading);
		self
	}

	/// Sets the decoration line.
	pub fn decoration(mut self, decoration: TextDecoration) -> Self {
		self.decoration = Some(decoration);
		self
	}

	/// Sets the family.
	pub fn family(mut self, family: impl Into<String>) -> Self {
		self.family = Some(family.into());
		self
	}

	/// Sets the text color.
	pub fn color(mut self, color: impl Into<Color>) -> Self {
		self.color = Some(color.into());
		self
	}
}

impl FromParameterBag for FontParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		Self {
			size: bag.parsed("size"),
			weight: bag.parsed("weight"),
			alignment: bag.parsed("alignment"),
			tracking: bag.parsed("tracking"),
			leading: bag.parsed("leading"),
			decoration: bag.parsed("decoration"),
			family: bag
				.text("family")
				.map(str::trim)
				.filter(|f| !f.is_empty())
				.map(str::to_string),
			color: bag.text("color").map(Color::parse),
		}
	}
}

impl StyleOperation for Font {
	type Parameters = FontParams;
	const NAME: &'static str = "font";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		let mut classes = Vec::new();
		if let Some(size) = params.size {
			classes.push(format!("text-{size}"));
		}
		if let Some(weight) = params.weight {
			classes.push(format!("font-{weight}"));
		}
		if let Some(alignment) = params.alignment {
			classes.push(format!("text-{alignment}"));
		}
		if let Some(tracking) = params.tracking {
			classes.push(format!("tracking-{tracking}"));
		}
		if let Some(leading) = params.leading {
			classes.push(format!("leading-{leading}"));
		}
		if let Some(decoration) = params.decoration {
			classes.push(decoration.as_str().to_string());
		}
		if let Some(family) = &params.family {
			classes.push(format!("font-{family}"));
		}
		if let Some(color) = &params.color {
			classes.push(format!("text-{}", color.token()));
		}
		classes.into_iter().map(ClassName::from).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_emits_nothing() {
		assert!(Font::class_names(&FontParams::new()).is_empty());
	}

	#[rstest]
	fn test_emission_order() {
		let params = FontParams::new()
			.color(Color::slate(700))
			.family("mono")
			.decoration(TextDecoration::Underline)
			.leading(TextLeading::Relaxed)
			.tracking(TextTracking::Wide)
			.alignment(TextAlignment::Center)
			.weight(FontWeight::SemiBold)
			.size(FontSize::Xl2);
		assert_eq!(
			Font::class_names(&params),
			vec![
				"text-2xl",
				"font-semibold",
				"text-center",
				"tracking-wide",
				"leading-relaxed",
				"underline",
				"font-mono",
				"text-slate-700",
			]
		);
	}

	#[rstest]
	#[case("700", FontWeight::Bold)]
	#[case("bold", FontWeight::Bold)]
	#[case("extralight", FontWeight::ExtraLight)]
	fn test_weight_aliases(#[case] input: &str, #[case] expected: FontWeight) {
		let bag = ParameterBag::new().with("weight", input);
		assert_eq!(FontParams::from_bag(&bag).weight, Some(expected));
	}

	#[rstest]
	fn test_from_bag_ignores_unknown_tokens() {
		let bag = ParameterBag::new().with("size", "huge").with("alignment", "center").with("family", " ");
		let params = FontParams::from_bag(&bag);
		assert_eq!(params.size, None);
		assert_eq!(params.alignment, Some(TextAlignment::Center));
		assert_eq!(params.family, None);
	}
}
