//! HTTP service for the preview page.
//!
//! The server keeps no per-visitor state. Each post carries the edit buffer
//! (textarea) and the submitted content (hidden field); the handler rebuilds
//! a [`PreviewForm`] from them, applies the pressed button's action and
//! renders the page again.

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{DefaultBodyLimit, Form, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::assets;
use crate::form::{Action, PreviewForm, UnknownAction};
use crate::markdown::{MarkdownRenderer, Render};
use crate::pages::home;

/// Path the page is served from and posts back to.
const PAGE_PATH: &str = "/";

/// Largest markdown document the page is expected to round-trip.
pub const MAX_DOCUMENT_BYTES: usize = 8 * 1024 * 1024;

/// Request body limit for form posts.
///
/// A post carries the edit buffer and the submitted content, and
/// urlencoding can triple each byte, so the limit covers two fully encoded
/// documents plus the remaining fields.
pub const MAX_FORM_BYTES: usize = 2 * 3 * MAX_DOCUMENT_BYTES + 64 * 1024;

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    renderer: Arc<dyn Render + Send + Sync>,
}

impl AppState {
    /// Creates state around a renderer.
    pub fn new(renderer: impl Render + Send + Sync + 'static) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MarkdownRenderer::new())
    }
}

/// Posted form fields.
///
/// Missing text fields decode as empty strings and a missing action as
/// `render`.
#[derive(Debug, Default, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub submitted: String,
    pub action: Option<String>,
}

impl Submission {
    /// Rebuilds the form state and parses the pressed button.
    ///
    /// Line endings are normalized to `\n`, since browsers submit textarea
    /// and hidden field values with `\r\n`.
    ///
    /// # Errors
    ///
    /// Returns error if the action name is unknown
    pub fn into_parts(self) -> Result<(PreviewForm, Action), UnknownAction> {
        let action = match self.action.as_deref() {
            None => Action::Render,
            Some(name) => name.parse()?,
        };
        let form = PreviewForm::from_parts(
            normalize_newlines(&self.markdown),
            normalize_newlines(&self.submitted),
        );
        Ok((form, action))
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Error response wrapping `anyhow::Error` with a status code.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    source: anyhow::Error,
}

impl AppError {
    /// Creates a 400 response error.
    pub fn bad_request(source: impl Into<anyhow::Error>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            source: source.into(),
        }
    }

    /// Status code the error responds with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, "{:#}", self.source);
        } else {
            debug!(status = %self.status, "{:#}", self.source);
        }

        (self.status, format!("{}: {:#}", self.status, self.source)).into_response()
    }
}

// Lets handlers use `?` on anyhow results; those become 500 responses.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            source: err.into(),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(PAGE_PATH, get(show_page).post(submit_page))
        .route("/assets/:name", get(stylesheet))
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES))
        .with_state(state)
}

/// Binds the address and serves until Ctrl-C.
///
/// # Arguments
///
/// * `addr`: Socket address to listen on
/// * `state`: Handler state
/// * `on_ready`: Called once the listener is bound
///
/// # Errors
///
/// Returns error if binding or serving fails
pub async fn serve(addr: SocketAddr, state: AppState, on_ready: impl FnOnce()) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "listening");
    on_ready();

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}

async fn show_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, &PreviewForm::new())
}

async fn submit_page(
    State(state): State<AppState>,
    Form(submission): Form<Submission>,
) -> Result<Html<String>, AppError> {
    let (mut form, action) = submission.into_parts().map_err(AppError::bad_request)?;

    debug!(
        %action,
        edit_len = form.edit_buffer().len(),
        submitted_len = form.submitted().len(),
        "applying form action"
    );
    form.apply(action);

    render_page(&state, &form)
}

fn render_page(state: &AppState, form: &PreviewForm) -> Result<Html<String>, AppError> {
    let markup = home::generate(form, state.renderer.as_ref(), PAGE_PATH)?;
    Ok(Html(markup.into_string()))
}

async fn stylesheet(Path(name): Path<String>) -> Response {
    match assets::stylesheet(&name) {
        Some(css) => ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response(),
        None => {
            debug!(%name, "unknown asset");
            (StatusCode::NOT_FOUND, "404 Not Found").into_response()
        }
    }
}
