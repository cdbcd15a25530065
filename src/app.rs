//! Command orchestration: config, request, redaction, and output.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::app_deps::{HomeApiFactory, RealHomeApiFactory};
use crate::cli::Cli;
use crate::config::Config;
use crate::constants::output::INDENT;
use crate::{paths, redact, validation};

pub struct App;

impl App {
    /// Fetch the requested resource and print it to stdout.
    pub async fn run(cli: Cli) -> Result<()> {
        let output = Self::execute(&RealHomeApiFactory, &cli).await?;
        println!("{}", output);
        Ok(())
    }

    /// Fetch the requested resource through `factory` and return the rendered
    /// output.
    ///
    /// The config file is read before any client is created, so a missing API
    /// key never results in a network call.
    pub async fn execute(factory: &dyn HomeApiFactory, cli: &Cli) -> Result<String> {
        let config_path = cli.config.clone().unwrap_or_else(paths::find_config_file);
        let config = Config::from_file(&config_path)?;
        let path = validation::normalize_api_path(&cli.url)?;

        tracing::debug!(
            host = cli.host(),
            path = %path,
            original = cli.original,
            "Fetching resource"
        );

        let api = factory.create(cli.host(), config.api_key.clone())?;
        let value = api
            .get(&path)
            .await
            .with_context(|| format!("Failed to fetch {}", path))?;

        let value = if cli.original {
            value
        } else {
            redact::redact(value)
        };

        Self::render(&value)
    }

    /// Serialize a JSON value with four-space indentation.
    pub fn render(value: &Value) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut ser)
            .context("Failed to serialize response")?;
        String::from_utf8(buf).context("Serialized response is not valid UTF-8")
    }
}
