//! CSS asset bundling

const BASE: &str = include_str!("../assets/base.css");
const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Stylesheet URLs the page links, in load order.
pub const STYLESHEETS: [&str; 2] = ["/assets/app.css", "/assets/markdown.css"];

/// Returns bundled CSS for an asset file name.
///
/// # Arguments
///
/// * `name`: File name under `/assets/` (e.g. `app.css`)
///
/// # Returns
///
/// Stylesheet text, or None for unknown names
pub fn stylesheet(name: &str) -> Option<String> {
    match name {
        "app.css" => Some(bundle(&[BASE, HOME_PAGE])),
        "markdown.css" => Some(bundle(&[MARKDOWN])),
        _ => None,
    }
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}
