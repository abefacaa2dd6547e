//! # vtree
//!
//! `vtree` builds virtual element trees with a declarative React-like API and renders them to
//! indented markup.
//!
//! Trees are made of [`Element`]s, which are either tags, functional [`Component`]s, or
//! [`Fragment`]s. They can be built with [`create_element`] or the [`element!`] macro, and
//! rendered with [`render_to_text`] or a [`Renderer`].
//!
//! # Example
//!
//! ```
//! use vtree::prelude::*;
//!
//! let e = element! {
//!     ul(class: "items") {
//!         li { "first" }
//!         li(selected: true) { "second" }
//!     }
//! };
//! assert_eq!(
//!     e.to_string(),
//!     "<ul class=\"items\">\n  <li>\n    first\n  </li>\n  <li selected>\n    second\n  </li>\n</ul>"
//! );
//! ```

#![warn(missing_docs)]

// # Organization
//
// Code is organized into modules primarily for the benefit of the maintainers. Types will be
// re-exported in the root so that users of the library have a flat namespace to work with.

mod component;
mod element;
mod escape;
mod props;
mod render;
mod value;

pub mod config;
pub mod error;

mod flattened_exports {
    pub use crate::component::*;
    pub use crate::config::*;
    pub use crate::element::*;
    pub use crate::error::*;
    pub use crate::escape::*;
    pub use crate::props::*;
    pub use crate::render::*;
    pub use crate::value::*;

    pub use vtree_macros::*;
}

pub use flattened_exports::*;

/// By importing this module, you'll bring all of the crate's commonly used types into scope.
pub mod prelude {
    pub use crate::flattened_exports::*;
}

// So we can use our own macros.
extern crate self as vtree;
