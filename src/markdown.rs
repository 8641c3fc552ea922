//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! The preview form depends only on the [`Render`] trait. [`MarkdownRenderer`]
//! is the production implementation backed by comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists, footnotes).

mod renderer;

use anyhow::Result;

pub use renderer::MarkdownRenderer;

/// Converts markdown source to an HTML fragment.
pub trait Render {
    /// Renders markdown to HTML.
    ///
    /// # Errors
    ///
    /// Returns error if the implementation cannot produce output
    fn render(&self, markdown: &str) -> Result<String>;
}
