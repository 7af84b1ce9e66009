//! Page chrome: header, footer and navigation around the document body.

use crate::route::Route;
use serde::Deserialize;
use weft_markup::Node;
use weft_markup::elements::{a, footer, header, li, main, nav, p, ul};

/// Header style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVariant {
	/// No header
	None,
	/// Site name and navigation links
	#[default]
	Normal,
	/// Site name only
	Minimal,
}

/// Footer style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterVariant {
	/// No footer
	None,
	/// Site name and navigation links
	#[default]
	Normal,
	/// Site name only
	Minimal,
}

/// Header, footer and navigation wrapped around every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layout {
	/// Header style
	pub header: HeaderVariant,
	/// Footer style
	pub footer: FooterVariant,
	/// Links shown in the header and footer
	pub navigation: Vec<Route>,
}

impl Layout {
	/// Normal header and footer with no links.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the header style.
	pub fn header(mut self, header: HeaderVariant) -> Self {
		self.header = header;
		self
	}

	/// Sets the footer style.
	pub fn footer(mut self, footer: FooterVariant) -> Self {
		self.footer = footer;
		self
	}

	/// Replaces the navigation links.
	pub fn navigation(mut self, navigation: impl IntoIterator<Item = Route>) -> Self {
		self.navigation = navigation.into_iter().collect();
		self
	}

	/// Wraps `content` in `header`, `main` and `footer`.
	pub fn wrap(&self, site_name: Option<&str>, content: Node) -> Node {
		let site_name = site_name.unwrap_or_default();
		let top = match self.header {
			HeaderVariant::None => None,
			HeaderVariant::Minimal => Some(header().child(home_link(site_name))),
			HeaderVariant::Normal => Some(
				header()
					.child(home_link(site_name))
					.child(self.nav_list().map(|links| nav().label("Main").child(links))),
			),
		};
		let bottom = match self.footer {
			FooterVariant::None => None,
			FooterVariant::Minimal => Some(footer().child(site_line(site_name))),
			FooterVariant::Normal => Some(
				footer()
					.child(site_line(site_name))
					.child(self.nav_list().map(|links| nav().label("Footer").child(links))),
			),
		};
		Node::fragment([top, Some(main().child(content)), bottom])
	}

	fn nav_list(&self) -> Option<Node> {
		if self.navigation.is_empty() {
			return None;
		}
		Some(ul().children(self.navigation.iter().map(|route| li().child(route_link(route)))))
	}
}

fn home_link(site_name: &str) -> Option<Node> {
	(!site_name.trim().is_empty()).then(|| a().attr("href", "/").child(site_name.to_string()))
}

fn site_line(site_name: &str) -> Option<Node> {
	(!site_name.trim().is_empty()).then(|| p().child(site_name.to_string()))
}

/// Anchor for a route, opening external new-tab links safely.
pub fn route_link(route: &Route) -> Node {
	let link = a().attr("href", route.href()).child(route.label.clone());
	if route.new_tab {
		link.attr("target", "_blank").attr("rel", "noreferrer")
	} else {
		link
	}
}
