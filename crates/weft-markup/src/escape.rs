//! HTML escaping for text content and attribute values.

use std::borrow::Cow;

/// Escapes text for use between tags.
///
/// Quotes are escaped as well so that escaped text stays safe if it ends up
/// inside an attribute value.
///
/// # Examples
///
/// ```
/// use weft_markup::escape::escape_text;
///
/// assert_eq!(escape_text("Hello, World!"), "Hello, World!");
/// assert_eq!(escape_text("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
	if text.contains(['&', '<', '>', '"', '\'']) {
		let encoded = html_escape::encode_text(text);
		Cow::Owned(encoded.replace('"', "&quot;").replace('\'', "&#x27;"))
	} else {
		Cow::Borrowed(text)
	}
}

/// Escapes a value for a double-quoted attribute.
///
/// # Examples
///
/// ```
/// use weft_markup::escape::escape_attribute;
///
/// assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
/// ```
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
	html_escape::encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("<script>", "&lt;script&gt;")]
	#[case("a&b", "a&amp;b")]
	#[case("\"quoted\"", "&quot;quoted&quot;")]
	#[case("it's", "it&#x27;s")]
	fn test_escape_text(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_text(input), expected);
	}

	#[rstest]
	fn test_escape_text_borrows_when_clean() {
		assert!(matches!(escape_text("nothing to do"), Cow::Borrowed(_)));
	}

	#[rstest]
	fn test_escape_attribute_quotes() {
		let escaped = escape_attribute("a\"b<c");
		assert!(!escaped.contains('"'));
		assert!(!escaped.contains('<'));
	}
}
