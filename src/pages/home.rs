//! Preview page generation

use anyhow::{Context, Result};
use maud::{Markup, html};

use crate::assets::STYLESHEETS;
use crate::components::input::input_panel;
use crate::components::layout::page_wrapper;
use crate::components::preview::preview_panel;
use crate::form::PreviewForm;
use crate::markdown::Render;

/// Document title of the page.
pub const TITLE: &str = "Markdown Renderer";

/// Generates the preview page for a form state
///
/// Renders the form's preview source through the renderer and lays out the
/// header, input panel and preview panel.
///
/// # Arguments
///
/// * `form`: View-model state to display
/// * `renderer`: Markdown renderer for the preview
/// * `form_action`: URL the form posts to
///
/// # Returns
///
/// Complete HTML document
///
/// # Errors
///
/// Returns error if the renderer fails
pub fn generate<R: Render + ?Sized>(
    form: &PreviewForm,
    renderer: &R,
    form_action: &str,
) -> Result<Markup> {
    let rendered = form
        .preview(renderer)
        .context("Failed to render markdown preview")?;

    Ok(page_wrapper(
        TITLE,
        &STYLESHEETS,
        html! {
            (page_header())
            div class="panels" {
                (input_panel(form, form_action))
                (preview_panel(&rendered))
            }
        },
    ))
}

fn page_header() -> Markup {
    html! {
        header class="page-header" {
            p class="page-eyebrow" { "Markdown Renderer" }
            h1 class="page-title" { "Render one markdown at a time" }
            p class="page-lead" {
                "Paste any markdown (resume, job description, or other content), \
                 submit, and see a single rendered preview below. Try again \
                 whenever you want to change it."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::PLACEHOLDER;

    /// Wraps input in a marker element without parsing it.
    struct MarkerRenderer;

    impl Render for MarkerRenderer {
        fn render(&self, markdown: &str) -> Result<String> {
            Ok(format!("<div data-marker>{}</div>", markdown.len()))
        }
    }

    struct FailingRenderer;

    impl Render for FailingRenderer {
        fn render(&self, _markdown: &str) -> Result<String> {
            anyhow::bail!("renderer unavailable")
        }
    }

    #[test]
    fn test_generate_includes_header_and_panels() {
        // Arrange
        let form = PreviewForm::from_parts("draft", "12345");

        // Act
        let page = generate(&form, &MarkerRenderer, "/")
            .expect("Should generate page")
            .into_string();

        // Assert
        assert!(page.contains("<title>Markdown Renderer</title>"));
        assert!(page.contains("Render one markdown at a time"));
        assert!(page.contains("Markdown input"));
        assert!(page.contains("<div data-marker>5</div>"));
        assert!(page.contains("action=\"/\""));
    }

    #[test]
    fn test_generate_falls_back_to_placeholder() {
        // Arrange
        let form = PreviewForm::from_parts("", "");

        // Act
        let page = generate(&form, &MarkerRenderer, "/")
            .expect("Should generate page")
            .into_string();

        // Assert
        let expected = format!("<div data-marker>{}</div>", PLACEHOLDER.len());
        assert!(page.contains(&expected), "Preview should use placeholder");
        assert!(page.contains("name=\"submitted\" value=\"\""));
    }

    #[test]
    fn test_generate_propagates_renderer_failure() {
        // Arrange
        let form = PreviewForm::new();

        // Act
        let result = generate(&form, &FailingRenderer, "/");

        // Assert
        let err = result.expect_err("Renderer failure should propagate");
        assert!(format!("{:#}", err).contains("renderer unavailable"));
    }
}
