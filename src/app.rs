//! The single-pass pipeline: resolve, load, refactor, write

use std::io::Write;

use reqwest::Client;

use crate::{
    cli::Cli,
    config::{RefactorConfig, Settings},
    error::{MdRefactorError, Result},
    output::OutputTarget,
    services::{OpenAIClient, Refactorer},
    source::DocumentSource,
};

/// Everything a run needs, resolved from flags, environment and settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub api_key: String,
    pub config: RefactorConfig,
    pub source: DocumentSource,
    pub output: OutputTarget,
}

impl RunOptions {
    /// Resolve run options, CLI values taking priority over `settings`
    ///
    /// The API key is checked before the source, so a missing key is reported
    /// even when no source was given.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key is empty, no source is
    /// given, or the GitHub URL is invalid
    pub fn resolve(cli: Cli, settings: &Settings) -> Result<Self> {
        let api_key = cli.apikey.unwrap_or_default();
        if api_key.is_empty() {
            return Err(MdRefactorError::ConfigValidation(
                "OpenAI API key is missing. Please provide it using the --apikey flag or set the OPENAI_API_KEY environment variable".to_string(),
            ));
        }

        let mut config = RefactorConfig::from_settings(settings);
        if let Some(model) = cli.model {
            config.model = model;
        }
        if let Some(prompt) = cli.prompt {
            config.system_prompt = prompt;
        }
        if let Some(prompt) = cli.gitprompt {
            config.github_prompt = prompt;
        }
        if let Some(endpoint) = cli.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(secs) = cli.timeout {
            config.timeout = std::time::Duration::from_secs(secs);
        }

        let source =
            DocumentSource::resolve(cli.input.as_deref(), cli.git.as_deref(), cli.fetch_raw)?;
        let output = OutputTarget::from_arg(cli.output.as_deref());

        Ok(Self {
            api_key,
            config,
            source,
            output,
        })
    }
}

/// Run the pipeline with an explicit refactorer and stdout
///
/// # Errors
///
/// Returns the first failure; nothing is written when loading or refactoring fails
pub async fn execute(
    options: &RunOptions,
    http: &Client,
    refactorer: &dyn Refactorer,
    stdout: &mut impl Write,
) -> Result<()> {
    let document = options.source.load(http, &options.config).await?;

    let refactored = refactorer
        .refactor(
            &options.api_key,
            &options.config.model,
            document.system_prompt(&options.config),
            &document.text,
        )
        .await?;

    options.output.write(&refactored, stdout)
}

/// Run the tool for parsed CLI arguments
///
/// # Errors
///
/// Returns the first configuration, I/O, transport or protocol failure
pub async fn run(cli: Cli) -> Result<()> {
    let settings_path = cli
        .config
        .clone()
        .unwrap_or_else(RefactorConfig::settings_path);
    let settings = Settings::load_from_path(&settings_path)?;

    let options = RunOptions::resolve(cli, &settings)?;
    tracing::debug!(
        model = %options.config.model,
        endpoint = %options.config.endpoint,
        timeout_secs = options.config.timeout.as_secs(),
        "resolved configuration"
    );

    let client = OpenAIClient::new(options.config.endpoint.clone(), options.config.timeout)?;

    execute(&options, client.http(), &client, &mut std::io::stdout()).await
}
