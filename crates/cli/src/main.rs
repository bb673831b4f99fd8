//! TrustLoop CLI - Snippet rendering and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Render the Liquid snippet for one widget config
//! trustloop render widget.yaml
//!
//! # Render the React component instead
//! trustloop render widget.yaml --format react
//!
//! # Print the stylesheet for a config (or the defaults)
//! trustloop stylesheet widget.yaml
//!
//! # Print install steps for a widget type
//! trustloop steps popup
//!
//! # Write every snippet for a catalog to disk
//! trustloop export --catalog widgets.yaml --out dist/
//!
//! # Print catalog performance figures
//! trustloop stats --catalog widgets.yaml
//! ```
//!
//! Generator settings come from the same `TRUSTLOOP_*` environment variables
//! the guide service reads. Output goes to stdout; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trustloop_embed::EmbedFormat;

mod commands;

#[derive(Parser)]
#[command(name = "trustloop")]
#[command(author, version, about = "TrustLoop widget snippet tools")]
struct Cli {
    /// HTML-escape customization values and IDs
    #[arg(long, global = true)]
    escape: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the embed snippet for a widget config file (YAML or JSON)
    Render {
        /// Widget config file
        config: PathBuf,

        /// Snippet format (`liquid`, `html`, `react`)
        #[arg(short, long, default_value = "liquid")]
        format: EmbedFormat,
    },
    /// Print the widget stylesheet
    Stylesheet {
        /// Widget config file; defaults are used when omitted
        config: Option<PathBuf>,
    },
    /// Print installation steps for a widget type
    Steps {
        /// Widget type tag (e.g. `carousel`, `popup`)
        widget_type: String,
    },
    /// Write snippets, stylesheet and instructions for every catalog widget
    Export {
        /// Widget catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print performance figures for a catalog
    Stats {
        /// Widget catalog file
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so snippets can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trustloop=info,trustloop_embed=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let generator = commands::generator(cli.escape)?;

    let output = match cli.command {
        Commands::Render { config, format } => {
            commands::render::snippet(&generator, &config, format).await?
        }
        Commands::Stylesheet { config } => {
            commands::render::stylesheet(&generator, config.as_deref()).await?
        }
        Commands::Steps { widget_type } => commands::render::steps(&widget_type),
        Commands::Export { catalog, out } => {
            let written = commands::catalog::export(&generator, &catalog, &out).await?;
            tracing::info!(files = written, out = %out.display(), "Export complete");
            return Ok(());
        }
        Commands::Stats { catalog } => commands::catalog::stats(&catalog).await?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
