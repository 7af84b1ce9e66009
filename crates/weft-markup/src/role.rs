//! ARIA landmark and widget roles.

/// Value of the `role` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AriaRole {
	/// `role="alert"`
	Alert,
	/// `role="article"`
	Article,
	/// `role="banner"`
	Banner,
	/// `role="button"`
	Button,
	/// `role="complementary"`
	Complementary,
	/// `role="contentinfo"`
	ContentInfo,
	/// `role="dialog"`
	Dialog,
	/// `role="figure"`
	Figure,
	/// `role="img"`
	Image,
	/// `role="link"`
	Link,
	/// `role="list"`
	List,
	/// `role="listitem"`
	ListItem,
	/// `role="main"`
	Main,
	/// `role="navigation"`
	Navigation,
	/// `role="presentation"`
	Presentation,
	/// `role="region"`
	Region,
	/// `role="search"`
	Search,
	/// `role="status"`
	Status,
	/// Any role not covered above.
	Custom(String),
}

impl AriaRole {
	/// Attribute value for this role.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Alert => "alert",
			Self::Article => "article",
			Self::Banner => "banner",
			Self::Button => "button",
			Self::Complementary => "complementary",
			Self::ContentInfo => "contentinfo",
			Self::Dialog => "dialog",
			Self::Figure => "figure",
			Self::Image => "img",
			Self::Link => "link",
			Self::List => "list",
			Self::ListItem => "listitem",
			Self::Main => "main",
			Self::Navigation => "navigation",
			Self::Presentation => "presentation",
			Self::Region => "region",
			Self::Search => "search",
			Self::Status => "status",
			Self::Custom(role) => role,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_role_as_str() {
		assert_eq!(AriaRole::Navigation.as_str(), "navigation");
		assert_eq!(AriaRole::Image.as_str(), "img");
		assert_eq!(AriaRole::ContentInfo.as_str(), "contentinfo");
		assert_eq!(AriaRole::Custom("tablist".into()).as_str(), "tablist");
	}
}
