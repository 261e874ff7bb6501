//! Site MCP Server
//!
//! A Model Context Protocol server that lets an assistant publish, find and
//! delete articles in an Astro blog checkout.
//!
//! # Usage
//!
//! ```bash
//! site-mcp [--root <path>] [--self-test]
//! ```
//!
//! # Environment Variables
//!
//! - `ASTRO_DIR`: Content root when `--root` is not given (default: `./astro`)
//! - `RUST_LOG`: Control log verbosity (default: `site_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use site_core::Site;
use site_mcp::SiteMcpServer;
use site_mcp::self_test::run_self_test;

/// MCP server for an Astro site content repository
#[derive(Parser)]
#[command(name = "site-mcp")]
#[command(about = "MCP server for an Astro site content repository")]
#[command(version)]
struct Args {
    /// Site root (the Astro project checkout)
    #[arg(short, long, env = "ASTRO_DIR", default_value = "./astro")]
    root: PathBuf,

    /// Run publish, search and delete once against the root, then exit
    #[arg(long)]
    self_test: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(root = ?args.root, "Starting site-mcp server");

    let site = Site::open(&args.root)?;

    if args.self_test {
        run_self_test(&site, &mut std::io::stdout()).await?;
        return Ok(());
    }

    let server = SiteMcpServer::new(site);
    server.run().await?;

    Ok(())
}
