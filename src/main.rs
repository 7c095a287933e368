use std::sync::Arc;

use clap::Parser;
use folio_site::adapters::http;
use folio_site::config::{Command, SiteArgs};
use folio_site::core::placeholder::placeholder_svg;
use folio_site::core::{ConfigProvider, ContentProvider};
use folio_site::utils::{logger, validation::Validate};
use folio_site::{
    AssetResolver, CliConfig, Content, LocalStorage, SiteBuilder, SiteConfig, SiteError, Tokens,
};

type Builder = SiteBuilder<LocalStorage, Content, AssetResolver<Tokens>>;

fn prepare(site: &SiteArgs, config: &SiteConfig) -> Result<Builder, SiteError> {
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");
    tracing::debug!("Site config: {:?}", config);

    let content = Content::load(config.content_path())?;
    let resolver = AssetResolver::new(config.asset.clone(), Tokens::from_seed(site.seed))?;
    let storage = LocalStorage::new(config.site.output_path.clone());
    Ok(SiteBuilder::new(storage, content, resolver, config))
}

async fn run(cli: CliConfig) -> Result<(), SiteError> {
    match cli.command {
        Command::Build { site, output } => {
            let mut config = site.load_config()?;
            if let Some(output) = output {
                config.site.output_path = output;
            }

            let builder = prepare(&site, &config)?;
            let output = builder.build().await?;
            tracing::info!("✅ Site built successfully!");
            println!("✅ Site written to: {}", output.output_path);
            for file in &output.files {
                println!("   {}", file);
            }
        }
        Command::Serve { site, addr } => {
            let mut config = site.load_config()?;
            if let Some(addr) = addr {
                config.server.addr = addr;
            }

            let builder = prepare(&site, &config)?;
            builder.ensure_static_dir().await?;
            http::serve(http::router(Arc::new(builder)), config.server_addr()).await?;
        }
        Command::Content { content } => {
            let portfolio = Content::load(content.as_deref())?.portfolio();
            println!("{}", serde_json::to_string_pretty(&portfolio)?);
        }
        Command::Placeholder {
            width,
            height,
            label,
        } => {
            println!("{}", placeholder_svg(width, height, &label));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::info!("🚀 Starting folio-site");

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ folio-site failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}
