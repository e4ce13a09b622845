// Operator CLI for TUBO Caption Studio

mod interactive;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Password};
use studio_core::{guide, Config, Session, Studio, StudioKernel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "studio", version, about = "Product page → brand-voice captions → Notion")]
struct Cli {
    /// Shared access password (prompted for when omitted)
    #[arg(long, global = true, env = "STUDIO_UNLOCK", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Menu-driven session: generate, edit, save, export (default)
    Interactive,
    /// Print the title and cleaned description extracted from a product page
    Extract { url: String },
    /// Generate a campaign and print it as JSON
    Generate { url: String },
    /// Show the operator manual
    Guide,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,studio_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    let missing = config.missing_settings();
    if !missing.is_empty() {
        tracing::info!(missing = ?missing, "Optional settings absent; related actions are disabled");
    }

    let kernel = StudioKernel::from_config(&config).context("Failed to build HTTP clients")?;
    let studio = Studio::new(config, kernel);
    let mut session = Session::new();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive::run(&studio, &mut session, cli.password).await,
        Command::Guide => {
            render::print_guide(&guide::resolve_steps(&studio.config().assets_dir));
            Ok(())
        }
        Command::Extract { url } => {
            unlock_once(&studio, &mut session, cli.password)?;
            let page = studio.extractor().extract(&url).await?;
            render::print_product(&page);
            Ok(())
        }
        Command::Generate { url } => {
            unlock_once(&studio, &mut session, cli.password)?;
            let campaign = studio.generate(&mut session, &url).await?;
            println!("{}", serde_json::to_string_pretty(campaign)?);
            Ok(())
        }
    }
}

/// Single unlock attempt for one-shot subcommands
fn unlock_once(studio: &Studio, session: &mut Session, password: Option<String>) -> Result<()> {
    let attempt = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("ENTER KEY")
            .allow_empty_password(true)
            .interact()?,
    };

    studio.unlock(session, &attempt)?;
    Ok(())
}
