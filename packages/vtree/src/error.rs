//! Error types for rendering.
//!
//! Most failures during rendering are recovered locally: a failing component or an unrecognized
//! node becomes an inline placeholder. [`RenderError`] covers the failures which abort a whole
//! render and are reported to the top-level caller instead.

use thiserror::Error;

/// The error type for [`Renderer::render`](crate::Renderer::render).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The tree is nested more deeply than the configured limit.
    #[error("maximum render depth of {limit} exceeded")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}
