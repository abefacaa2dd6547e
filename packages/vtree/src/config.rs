//! Configuration for the renderer.
//!
//! [`RenderConfig`] implements [`serde::Deserialize`] so hosts can load it from their own
//! configuration files. Every field is optional and falls back to its default.
//!
//! # Example
//!
//! ```
//! # use vtree::RenderConfig;
//! let config = RenderConfig::default().with_indent_width(4);
//! assert_eq!(config.indent_width(), 4);
//! assert_eq!(config.max_depth(), None);
//! ```

use serde::Deserialize;

/// The number of spaces in one level of indentation, unless configured otherwise.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Options which control how trees are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Spaces per level of indentation.
    indent_width: usize,

    /// The deepest level of nesting the renderer will descend to. Unlimited if unset.
    max_depth: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_depth: None,
        }
    }
}

impl RenderConfig {
    /// Sets the number of spaces per level of indentation.
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Sets the deepest level of nesting the renderer will descend to.
    ///
    /// Every element (tag, fragment, or component) and every list adds a level, counted from the
    /// value passed to the renderer. This is independent of indentation, so it also stops
    /// components which expand into themselves.
    pub fn with_max_depth(mut self, max_depth: impl Into<Option<usize>>) -> Self {
        self.max_depth = max_depth.into();
        self
    }

    /// Returns the number of spaces per level of indentation.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Returns the depth limit, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
