//! Integration tests for the preview form with the real renderer.

use anyhow::Result;
use mdpreview::pages::home;
use mdpreview::{
    Action, JOB_DESCRIPTION, MarkdownRenderer, PLACEHOLDER, PreviewForm, RESUME, Sample,
};

/// Tests the documented quick-fill then submit sequence end to end.
#[test]
fn test_quick_fill_submit_sequence() -> Result<()> {
    // Arrange
    let renderer = MarkdownRenderer::new();
    let mut form = PreviewForm::new();

    // Act
    form.quick_fill(JOB_DESCRIPTION);
    let before = form.preview(&renderer)?;
    form.submit();
    let after = form.preview(&renderer)?;

    // Assert
    assert_eq!(form.edit_buffer(), JOB_DESCRIPTION);
    assert_eq!(form.submitted(), JOB_DESCRIPTION);
    assert!(before.contains("<h1>Darwin Labiste</h1>"));
    assert!(after.contains("<h4>Job Overview:</h4>"));

    Ok(())
}

/// Tests every action leaves the form in the documented state.
#[test]
fn test_actions_from_arbitrary_state() {
    // Arrange
    let start = PreviewForm::from_parts("draft", "shown");
    let cases = [
        (Action::Render, "draft", "draft"),
        (Action::Reset, "", ""),
        (Action::Load(Sample::Resume), RESUME, "shown"),
        (Action::Load(Sample::JobDescription), JOB_DESCRIPTION, "shown"),
    ];

    for (action, edit_buffer, submitted) in cases {
        let mut form = start.clone();

        // Act
        form.apply(action);

        // Assert
        assert_eq!(form.edit_buffer(), edit_buffer, "after {}", action);
        assert_eq!(form.submitted(), submitted, "after {}", action);
    }
}

/// Tests the generated page after a reset.
#[test]
fn test_generated_page_after_reset() -> Result<()> {
    // Arrange
    let renderer = MarkdownRenderer::new();
    let mut form = PreviewForm::new();
    form.reset();

    // Act
    let page = home::generate(&form, &renderer, "/")?.into_string();

    // Assert
    assert!(page.contains("<h1>Paste any markdown</h1>"));
    assert!(page.contains("name=\"submitted\" value=\"\""));
    assert!(page.contains(&format!("placeholder=\"{}\"", PLACEHOLDER)));

    Ok(())
}
