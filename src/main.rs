use clap::Parser;
use colored::*;

use api_design_util::app::App;
use api_design_util::cli::Cli;
use api_design_util::error::format_error_chain;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so stdout carries only the JSON document
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = App::run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), format_error_chain(&err));
        std::process::exit(1);
    }
}
