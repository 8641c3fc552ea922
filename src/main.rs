use anyhow::{Context, Result};
use mdpreview::{AppState, Config, MarkdownRenderer};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::parse();
    mdpreview::logging::init();
    config.validate().context("Invalid configuration")?;

    let addr = config.socket_addr()?;
    let url = config.url();
    let state = AppState::new(MarkdownRenderer::new());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(mdpreview::serve(addr, state, || {
        info!("Serving markdown preview at {}", url);

        if config.no_open {
            return;
        }

        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser: {}", e);
        }
    }))
}
