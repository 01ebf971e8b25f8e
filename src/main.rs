//! mdrefactor binary entry point

use color_eyre::Result;
use mdrefactor::{app, cli::Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install error handler
    color_eyre::install()?;

    // OPENAI_API_KEY may live in a .env file
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Set up logging; progress goes to stderr so stdout carries only the result
    let default_filter = if cli.verbose {
        "mdrefactor=debug"
    } else {
        "mdrefactor=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    app::run(cli).await?;

    Ok(())
}
