//! Weft Markup - node model and HTML serialization
//!
//! This crate holds the part of weft that turns a tree of values into HTML:
//!
//! - [`attributes`]: ordered start-tag attributes and void-element handling
//! - [`class`]: class tokens and the deduplicating class list
//! - [`node`]: the [`Node`] value, lazy content, and the [`Markup`] contract
//! - [`elements`]: constructors for common tags
//! - [`escape`]: text and attribute escaping
//!
//! ## Example
//!
//! ```
//! use weft_markup::{Markup, Node};
//! use weft_markup::elements::{section, p};
//!
//! let page = section()
//!     .id("intro")
//!     .class("prose")
//!     .child(p().child("Hello"))
//!     .content(|| p().child("rendered lazily"));
//!
//! assert_eq!(
//!     page.render(),
//!     "<section id=\"intro\" class=\"prose\"><p>Hello</p><p>rendered lazily</p></section>"
//! );
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod class;
pub mod elements;
pub mod escape;
pub mod node;
pub mod role;

pub use attributes::{Attribute, AttributeBuilder, AttributeList, is_void_element, render_tag};
pub use class::{ClassList, ClassName};
pub use node::{ContentFn, IntoNode, Markup, Node};
pub use role::AriaRole;
