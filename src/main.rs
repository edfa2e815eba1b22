use anyhow::Result;
use clap::Parser;
use lc_fetch::{fetch_question, render_question, FetcherConfigBuilder, DEFAULT_BASE_URL};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fetch a LeetCode problem and print it as plain text.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Problem URL, e.g. https://leetcode.com/problems/two-sum/
    url: String,

    /// Service root the requests go to; only tests point this elsewhere.
    #[arg(long, hide = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // nothing left to report if stderr itself is gone
            err.print().ok();
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };

    setup_logging();

    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String> {
    let config = FetcherConfigBuilder::default()
        .base_url(cli.base_url.as_str())
        .build()?;
    let question = fetch_question(&cli.url, config).await?;
    Ok(render_question(&question)?)
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
