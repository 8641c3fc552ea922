//! Markdown preview form served over HTTP.
//!
//! Paste markdown, submit, and see it rendered with GitHub Flavored Markdown
//! below the form. Two canned samples can be loaded into the input.

mod assets;
pub mod components;
mod config;
pub mod form;
pub mod logging;
mod markdown;
pub mod pages;
pub mod samples;
pub mod server;

pub use assets::{STYLESHEETS, stylesheet};
pub use config::Config;
pub use form::{Action, PreviewForm, UnknownAction};
pub use markdown::{MarkdownRenderer, Render};
pub use samples::{JOB_DESCRIPTION, PLACEHOLDER, RESUME, Sample};
pub use server::{AppError, AppState, Submission, router, serve};
