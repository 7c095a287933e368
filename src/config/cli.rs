use crate::config::toml_config::SiteConfig;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "folio-site")]
#[command(about = "Builds and serves a single-page portfolio site")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write index.html and placeholder graphics to the output directory
    Build {
        #[command(flatten)]
        site: SiteArgs,

        /// Output directory, overrides site.output_path
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Serve the page over HTTP, rendering it fresh per request
    Serve {
        #[command(flatten)]
        site: SiteArgs,

        /// Listen address, overrides server.addr
        #[arg(long)]
        addr: Option<String>,
    },
    /// Print the portfolio content as JSON
    Content {
        /// TOML content file, built-in content when omitted
        #[arg(long)]
        content: Option<String>,
    },
    /// Print a placeholder SVG
    Placeholder {
        #[arg(long)]
        width: u32,

        #[arg(long)]
        height: u32,

        #[arg(long, default_value = "AI Image")]
        label: String,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct SiteArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// TOML content file, overrides content.path
    #[arg(long)]
    pub content: Option<String>,

    /// Courtesy delay between image resolutions, overrides asset.delay_ms
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible cache-busting tokens
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SiteArgs {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn load_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                SiteConfig::from_file(path)?
            }
            None => SiteConfig::default(),
        };

        if let Some(content) = &self.content {
            config.content.path = Some(content.clone());
        }
        if let Some(delay_ms) = self.delay_ms {
            tracing::info!("🔧 Image delay overridden to: {}ms", delay_ms);
            config.asset.delay_ms = delay_ms;
        }
        Ok(config)
    }
}
