use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use newsverify::{Commands, Container, ContainerConfig, LlmProvider, Router};

#[derive(Parser)]
#[command(name = "newsverify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true, env = "LLM_PROVIDER", value_enum, default_value_t = LlmProvider::Deepseek)]
    provider: LlmProvider,

    /// API key; defaults to the provider's variable (DEEPSEEK_API_KEY, OPENAI_API_KEY, ANTHROPIC_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[arg(long, global = true, env = "LLM_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, global = true, env = "LLM_MODEL")]
    model: Option<String>,

    #[arg(long, global = true, env = "LLM_TIMEOUT_SECS", default_value = "60")]
    timeout_secs: u64,

    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let container = Container::new(ContainerConfig {
        provider: cli.provider,
        api_key: cli.api_key,
        base_url: cli.base_url,
        model: cli.model,
        timeout_secs: cli.timeout_secs,
        mock_llm: cli.mock_llm,
    })?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
