//! View-model for the markdown preview form.
//!
//! The form owns two text cells: the edit buffer bound to the textarea and
//! the submitted content shown in the preview. Every operation is
//! synchronous and total over arbitrary input.

use anyhow::Result;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::markdown::Render;
use crate::samples::{PLACEHOLDER, RESUME, Sample};

/// Edit buffer and last submitted content of one page instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewForm {
    edit_buffer: String,
    submitted: String,
}

impl PreviewForm {
    /// Creates a form with both cells holding the resume sample.
    pub fn new() -> Self {
        Self::from_parts(RESUME, RESUME)
    }

    /// Rebuilds a form from previously rendered state.
    ///
    /// # Arguments
    ///
    /// * `edit_buffer`: Current textarea content
    /// * `submitted`: Content last submitted for rendering
    pub fn from_parts(edit_buffer: impl Into<String>, submitted: impl Into<String>) -> Self {
        Self {
            edit_buffer: edit_buffer.into(),
            submitted: submitted.into(),
        }
    }

    /// Text currently in the input control.
    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    /// Text last submitted for rendering. May be empty after a reset.
    pub fn submitted(&self) -> &str {
        &self.submitted
    }

    /// Markdown the preview displays: submitted content, or the placeholder
    /// when nothing has been submitted.
    pub fn preview_source(&self) -> &str {
        if self.submitted.is_empty() {
            PLACEHOLDER
        } else {
            &self.submitted
        }
    }

    /// Replaces the edit buffer.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.edit_buffer = text.into();
    }

    /// Copies the edit buffer into the submitted content.
    ///
    /// An empty edit buffer submits the placeholder instead.
    pub fn submit(&mut self) {
        self.submitted = if self.edit_buffer.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.edit_buffer.clone()
        };
    }

    /// Clears both cells.
    pub fn reset(&mut self) {
        self.edit_buffer.clear();
        self.submitted.clear();
    }

    /// Loads sample text into the edit buffer without touching the preview.
    pub fn quick_fill(&mut self, sample_text: &str) {
        self.edit_buffer = sample_text.to_string();
    }

    /// Applies a user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Render => self.submit(),
            Action::Reset => self.reset(),
            Action::Load(sample) => self.quick_fill(sample.text()),
        }
    }

    /// Renders the preview source through the given renderer.
    ///
    /// # Errors
    ///
    /// Returns whatever error the renderer reports
    pub fn preview<R: Render + ?Sized>(&self, renderer: &R) -> Result<String> {
        renderer.render(self.preview_source())
    }
}

impl Default for PreviewForm {
    fn default() -> Self {
        Self::new()
    }
}

/// User actions the form buttons trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// "Render markdown"
    Render,
    /// "Try again"
    Reset,
    /// Quick-fill buttons
    Load(Sample),
}

impl Action {
    /// All actions in button order.
    pub const ALL: [Action; 4] = [
        Action::Render,
        Action::Reset,
        Action::Load(Sample::Resume),
        Action::Load(Sample::JobDescription),
    ];

    /// Name submitted as the `action` form value.
    pub fn name(self) -> &'static str {
        match self {
            Action::Render => "render",
            Action::Reset => "reset",
            Action::Load(Sample::Resume) => "load-resume",
            Action::Load(Sample::JobDescription) => "load-job-description",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an action name no button produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form action: {:?}", self.0)
    }
}

impl Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
