//! Box edges and corners.

token_enum! {
	/// Box edge targeted by spacing and border styles.
	pub enum Edge {
		/// Every edge (no suffix)
		All => "" | "all",
		/// `t`
		Top => "t" | "top",
		/// `b`
		Bottom => "b" | "bottom",
		/// Inline start, `s`
		Leading => "s" | "leading" | "start",
		/// Inline end, `e`
		Trailing => "e" | "trailing" | "end",
		/// Left and right, `x`
		Horizontal => "x" | "horizontal",
		/// Top and bottom, `y`
		Vertical => "y" | "vertical",
	}
}

token_enum! {
	/// Side or corner targeted by border radius.
	pub enum RadiusSide {
		/// Every corner (no suffix)
		All => "" | "all",
		/// `t`
		Top => "t" | "top",
		/// `b`
		Bottom => "b" | "bottom",
		/// `s`
		Leading => "s" | "leading" | "start",
		/// `e`
		Trailing => "e" | "trailing" | "end",
		/// `ss`
		TopLeading => "ss" | "top-leading" | "start-start",
		/// `se`
		TopTrailing => "se" | "top-trailing" | "start-end",
		/// `es`
		BottomLeading => "es" | "bottom-leading" | "end-start",
		/// `ee`
		BottomTrailing => "ee" | "bottom-trailing" | "end-end",
	}
}

/// Joins `base` and an edge suffix with `separator`, omitting both for
/// [`Edge::All`]-style empty suffixes.
pub(crate) fn edge_token(base: &str, separator: &str, suffix: &str) -> String {
	if suffix.is_empty() {
		base.to_string()
	} else {
		format!("{base}{separator}{suffix}")
	}
}

/// Deduplicates a list of edges keeping the first occurrence.
///
/// An empty list means every edge.
pub(crate) fn normalize<T: PartialEq + Copy>(items: &[T], all: T) -> Vec<T> {
	let mut out = Vec::with_capacity(items.len().max(1));
	for item in items {
		if !out.contains(item) {
			out.push(*item);
		}
	}
	if out.is_empty() {
		out.push(all);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("top", Edge::Top)]
	#[case("x", Edge::Horizontal)]
	#[case("leading", Edge::Leading)]
	#[case("all", Edge::All)]
	fn test_edge_parse(#[case] input: &str, #[case] expected: Edge) {
		assert_eq!(input.parse::<Edge>(), Ok(expected));
	}

	#[rstest]
	fn test_unknown_edge() {
		let err = "diagonal".parse::<Edge>().unwrap_err();
		assert_eq!(err.to_string(), "unknown Edge token: \"diagonal\"");
	}

	#[rstest]
	fn test_normalize() {
		assert_eq!(normalize(&[], Edge::All), vec![Edge::All]);
		assert_eq!(
			normalize(&[Edge::Top, Edge::Bottom, Edge::Top], Edge::All),
			vec![Edge::Top, Edge::Bottom]
		);
	}

	#[rstest]
	#[case("m", "", "", "m")]
	#[case("m", "", "t", "mt")]
	#[case("border", "-", "", "border")]
	#[case("border", "-", "x", "border-x")]
	fn test_edge_token(
		#[case] base: &str,
		#[case] separator: &str,
		#[case] suffix: &str,
		#[case] expected: &str,
	) {
		assert_eq!(edge_token(base, separator, suffix), expected);
	}
}
