//! Shared test utilities for HTTP tests.
//!
//! Drives the router in process with `tower::ServiceExt::oneshot` and pulls
//! the form state back out of rendered pages.

#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mdpreview::{AppState, router};
use tower::ServiceExt;

/// Response status, content type and body text.
pub struct Page {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

/// Creates router with the real markdown renderer.
pub fn app() -> Router {
    router(AppState::default())
}

/// Sends GET request.
///
/// # Errors
///
/// Returns error if request fails or body is not UTF8
pub async fn get(app: &Router, uri: &str) -> Result<Page> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())?;
    send(app, request).await
}

/// Posts urlencoded form fields to the page.
///
/// # Arguments
///
/// * `app`: Router under test
/// * `fields`: Field name and value pairs, encoded in order
///
/// # Errors
///
/// Returns error if request fails or body is not UTF8
pub async fn post_form(app: &Router, fields: &[(&str, &str)]) -> Result<Page> {
    let body = fields
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?;
    send(app, request).await
}

/// Posts the state shown on a page back with the given action.
///
/// # Errors
///
/// Returns error if the page lacks form fields or the request fails
pub async fn press(app: &Router, page: &Page, action: &str) -> Result<Page> {
    let markdown = textarea_value(&page.body)?;
    let submitted = submitted_value(&page.body)?;
    post_form(
        app,
        &[
            ("markdown", markdown.as_str()),
            ("submitted", submitted.as_str()),
            ("action", action),
        ],
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> Result<Page> {
    let response = app.clone().oneshot(request).await?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = String::from_utf8(bytes.to_vec()).context("Response body is not UTF8")?;

    Ok(Page {
        status,
        content_type,
        body,
    })
}

/// Extracts the edit buffer from the page textarea.
///
/// # Errors
///
/// Returns error if the page has no textarea
pub fn textarea_value(html: &str) -> Result<String> {
    let open = html.find("<textarea").context("Page has no textarea")?;
    let start = open + html[open..].find('>').context("Unterminated textarea tag")? + 1;
    let end = start
        + html[start..]
            .find("</textarea>")
            .context("Unclosed textarea")?;

    let raw = &html[start..end];
    Ok(unescape(raw.strip_prefix('\n').unwrap_or(raw)))
}

/// Extracts the hidden submitted content.
///
/// # Errors
///
/// Returns error if the page has no submitted field
pub fn submitted_value(html: &str) -> Result<String> {
    const MARKER: &str = "name=\"submitted\" value=\"";

    let start = html.find(MARKER).context("Page has no submitted field")? + MARKER.len();
    let end = start + html[start..].find('"').context("Unterminated value")?;
    Ok(unescape(&html[start..end]))
}

/// Extracts the rendered preview HTML.
///
/// # Errors
///
/// Returns error if the page has no preview article
pub fn preview_html(html: &str) -> Result<&str> {
    const MARKER: &str = "<article class=\"markdown-body preview\">";

    let start = html.find(MARKER).context("Page has no preview")? + MARKER.len();
    let end = start + html[start..].find("</article>").context("Unclosed preview")?;
    Ok(&html[start..end])
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
