//! Markdown input panel with the form and its action buttons

use maud::{Markup, html};

use super::layout::panel_header;
use crate::form::{Action, PreviewForm};
use crate::samples::PLACEHOLDER;

/// Form field carrying the edit buffer.
pub const MARKDOWN_FIELD: &str = "markdown";

/// Hidden form field carrying the submitted content between requests.
pub const SUBMITTED_FIELD: &str = "submitted";

/// Form field naming the pressed button.
pub const ACTION_FIELD: &str = "action";

/// Renders the input panel for the current form state
///
/// Every button submits the form with its own `action` value, so the page
/// works without script. "Render markdown" comes first and is therefore the
/// default button of the form.
///
/// # Arguments
///
/// * `form`: Current view-model state
/// * `form_action`: URL the form posts to
///
/// # Returns
///
/// Panel markup with textarea, hidden submitted field and buttons
pub fn input_panel(form: &PreviewForm, form_action: &str) -> Markup {
    html! {
        section class="panel" {
            (panel_header("Markdown input", "Only one submission is rendered at a time."))
            form class="input-form" method="post" action=(form_action) {
                label class="input-label" for="markdown-input" {
                    "Paste or edit your markdown"
                }
                // HTML parsing drops one newline right after <textarea>
                textarea
                    id="markdown-input"
                    class="input-area"
                    name=(MARKDOWN_FIELD)
                    placeholder=(PLACEHOLDER) {
                    "\n" (form.edit_buffer())
                }
                input type="hidden" name=(SUBMITTED_FIELD) value=(form.submitted());
                div class="actions" {
                    @for action in Action::ALL {
                        (action_button(action))
                    }
                }
            }
        }
    }
}

fn action_button(action: Action) -> Markup {
    let (caption, class) = match action {
        Action::Render => ("Render markdown", "btn btn-primary"),
        Action::Reset => ("Try again", "btn btn-secondary"),
        Action::Load(sample) => (sample.label(), "btn btn-sample"),
    };

    html! {
        button type="submit" class=(class) name=(ACTION_FIELD) value=(action.name()) {
            (caption)
        }
    }
}
