//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

/// Command line configuration for mdpreview.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdpreview", version, about, long_about = None)]
pub struct Config {
    /// Address or hostname to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Do not open the page in the default browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if host is empty or cannot be resolved, or port is zero.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("Host must not be empty");
        }

        if self.port == 0 {
            bail!("Port must be non-zero");
        }

        self.socket_addr()?;

        Ok(())
    }

    /// Returns socket address to bind.
    ///
    /// Hostnames resolve to their first address.
    ///
    /// # Errors
    ///
    /// Returns error if host cannot be resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("Cannot resolve listen address: {}", self.host))?
            .next()
            .with_context(|| format!("No address found for host: {}", self.host))
    }

    /// Returns URL the page is served at.
    ///
    /// Unspecified addresses (0.0.0.0, ::) are reported as localhost so the
    /// URL can be opened in a browser. Hostnames are kept as given.
    pub fn url(&self) -> String {
        let host = match self.host.parse::<IpAddr>() {
            Ok(ip) if ip.is_unspecified() => "localhost".to_string(),
            Ok(IpAddr::V6(v6)) => format!("[{}]", v6),
            Ok(IpAddr::V4(v4)) => v4.to_string(),
            Err(_) => self.host.clone(),
        };
        format!("http://{}:{}/", host, self.port)
    }
}
