//! CLI configuration from environment.

use std::env;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            output: env::var("CLIMB_OUTPUT")
                .ok()
                .and_then(|s| OutputFormat::parse(&s))
                .unwrap_or_default(),
            log_filter: env::var("CLIMB_LOG")
                .unwrap_or_else(|_| "climb_cli=info,climb_core=info".to_string()),
        }
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_output(mut self, output: Option<OutputFormat>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
