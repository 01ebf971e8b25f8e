//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

/// mdrefactor: refactor Markdown with a chat-completion model
#[derive(Debug, Parser)]
#[command(name = "mdrefactor")]
#[command(about = "Refactor a Markdown document with an OpenAI-compatible chat model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the input Markdown file
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Path to the output Markdown file (prints to stdout if not provided)
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub apikey: Option<String>,

    /// Model to use (e.g. gpt-3.5-turbo, gpt-4)
    #[arg(long)]
    pub model: Option<String>,

    /// System prompt to guide the refactoring
    #[arg(long)]
    pub prompt: Option<String>,

    /// GitHub URL to build a README from
    #[arg(long, value_name = "URL")]
    pub git: Option<String>,

    /// System prompt used with --git
    #[arg(long)]
    pub gitprompt: Option<String>,

    /// With --git, download the file behind a blob URL and send its contents
    #[arg(long, requires = "git")]
    pub fetch_raw: bool,

    /// Chat-completion endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Settings file
    #[arg(long, env = "MDREFACTOR_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
