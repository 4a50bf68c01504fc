//! `tagline` command-line entry point.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use tagline_rs::core::TaglineService;
use tagline_rs::protocol::{DEFAULT_COUNT, GenerateRequest, HistoryResponse, Tone};
use tagline_rs::{ConfigOverrides, init_logging, load_config};

/// Generate marketing taglines and browse past results.
#[derive(Parser)]
#[command(name = "tagline", version)]
struct Cli {
    /// Optional path to a tagline.json5 config file, applied as the top layer
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the SQLite database path
    #[arg(long, global = true)]
    db: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the listen address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Generate taglines once and print them
    Generate(GenerateArgs),
    /// Print stored taglines, newest first
    History {
        /// Print the raw JSON history payload
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    audience: String,
    /// funny, professional, luxury or casual
    #[arg(long, default_value_t = Tone::default())]
    tone: Tone,
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        bind: match &cli.command {
            Command::Serve { bind } => bind.clone(),
            _ => None,
        },
        db: cli.db.clone(),
    };
    let cwd = std::env::current_dir().context("cwd")?;
    let config = load_config(&cwd, cli.config.as_deref(), &overrides)
        .context("failed to load config")?;
    info!(
        "config loaded (provider={:?}, model={}, store={})",
        config.provider.kind,
        config.provider.model_name(),
        config.store.path
    );
    let service = TaglineService::from_config(&config).context("failed to set up service")?;

    match cli.command {
        Command::Serve { .. } => {
            tagline_rs::server::serve(&config.server, service)
                .await
                .context("server failed")?;
        }
        Command::Generate(args) => {
            let request = GenerateRequest {
                name: args.name,
                description: args.description,
                audience: args.audience,
                tone: args.tone,
                count: args.count,
            };
            let taglines = service
                .generate(request)
                .await
                .context("failed to generate taglines")?;
            for tagline in taglines {
                println!("{tagline}");
            }
        }
        Command::History { json } => {
            let history = service.history().await.context("failed to load history")?;
            if json {
                let payload = serde_json::to_string_pretty(&HistoryResponse { history })?;
                println!("{payload}");
            } else {
                for record in history {
                    println!(
                        "{}\t{}\t{}\t{}",
                        record.id, record.product_name, record.tone, record.tagline
                    );
                }
            }
        }
    }
    Ok(())
}
