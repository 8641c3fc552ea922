//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure. The
/// wrapper handles viewport configuration, charset, and stylesheet loading
/// while the caller provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheets`: CSS URLs to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                main class="container" {
                    (body)
                }
            }
        }
    }
}

/// Renders a panel heading with title and short note
pub fn panel_header(title: &str, note: &str) -> Markup {
    html! {
        div class="panel-header" {
            h2 class="panel-title" { (title) }
            p class="panel-note" { (note) }
        }
    }
}
