use anyhow::{Context, Result};
use card_directory::{DirectoryClient, DirectoryConfig, DirectoryError, PublicKeyToken};
use card_pdf::{run_batch, CardOptions, CardUser, DocumentAssets, OutputMode};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardgen", about = "Render printable member identity cards", version)]
struct Cli {
    /// Public key tokens, optionally pre-annotated as name:key
    keys: Vec<String>,

    /// Read tokens from a file instead (one per line)
    #[arg(short, long, conflicts_with = "keys")]
    input: Option<PathBuf>,

    /// Combine all users into one multi-page PDF
    #[arg(short, long)]
    combine: bool,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Footer logo image
    #[arg(long, default_value = "assets/logo.png")]
    logo: PathBuf,

    /// Icon font for the key glyph (omitted if not given)
    #[arg(long)]
    icon_font: Option<PathBuf>,

    /// Primary directory service base URL
    #[arg(long, default_value = card_directory::DEFAULT_PRIMARY_URL)]
    primary_url: String,

    /// Fallback directory service base URL
    #[arg(long, default_value = card_directory::DEFAULT_FALLBACK_URL)]
    fallback_url: String,

    /// Per-request lookup timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

async fn read_tokens(cli: &Cli) -> Result<Vec<PublicKeyToken>> {
    let raw: Vec<String> = match &cli.input {
        Some(path) => {
            let contents = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading token file {}", path.display()))?;
            contents.lines().map(str::to_string).collect()
        }
        None => cli.keys.clone(),
    };

    Ok(raw
        .iter()
        .filter_map(|line| PublicKeyToken::parse(line))
        .collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let tokens = read_tokens(&cli).await?;
    if tokens.is_empty() {
        anyhow::bail!("no key tokens given; pass keys as arguments or use --input");
    }

    let client = DirectoryClient::new(DirectoryConfig {
        primary_url: cli.primary_url.clone(),
        fallback_url: cli.fallback_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    })?;

    // Strictly sequential: the directory services are rate-sensitive
    // and sequential output keeps page order deterministic.
    let mut users = Vec::new();
    for token in &tokens {
        match client.resolve(token).await {
            Ok(resolved) => users.push(CardUser {
                display_name: resolved.display_name,
                key: resolved.key,
            }),
            Err(DirectoryError::NotFound { key }) => {
                tracing::warn!("No directory entry for key {key}, skipping");
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mode = if cli.combine {
        OutputMode::SingleFile
    } else {
        OutputMode::PerUserFile
    };

    let assets = DocumentAssets::load(&cli.logo, cli.icon_font.as_deref())
        .await
        .with_context(|| format!("loading assets (logo: {})", cli.logo.display()))?;

    let summary = run_batch(&users, mode, &CardOptions::default(), &assets, &cli.output_dir).await?;

    println!(
        "Rendered {} user(s) into {} file(s), skipped {}",
        summary.rendered,
        summary.files.len(),
        summary.skipped + (tokens.len() - users.len())
    );

    Ok(())
}
