//! Rendered markdown preview panel

use maud::{Markup, PreEscaped, html};

use super::layout::panel_header;

/// Renders the preview panel around already rendered HTML
///
/// The HTML is inserted unescaped; callers pass renderer output only.
pub fn preview_panel(rendered_html: &str) -> Markup {
    html! {
        section class="panel" {
            (panel_header("Preview", "GitHub-flavored markdown rendering."))
            article class="markdown-body preview" {
                (PreEscaped(rendered_html))
            }
        }
    }
}
