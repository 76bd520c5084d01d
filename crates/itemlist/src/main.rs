use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use itemlist_fetch::{Fetcher, Pipeline, ReqwestClient};

use crate::cli::App;
use crate::config::Config;

mod cli;
mod config;
mod logging;
mod render;

#[tokio::main]
async fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose, app.quiet);

    match run(app).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(app: App) -> Result<ExitCode> {
    let config = Config::load(app.config.as_deref(), app.overrides())?;
    tracing::info!(url = %config.url, policy = %config.policy, "fetching item list");

    let client = ReqwestClient::new().context("failed to build HTTP client")?;
    let fetcher = Fetcher::new(client).with_options(config.fetch_options());
    let handle = Pipeline::new(fetcher, config.policy).spawn(config.url.clone());

    let token = handle.token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted, cancelling fetch");
            token.cancel();
        }
    });

    match handle.join().await {
        Ok(records) => {
            let rendered = render::render(&records, config.format, config.grouped)?;
            writeln!(io::stdout().lock(), "{rendered}").context("failed to write item list")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = %e, "nothing to display");
            eprintln!("{}", render::ERROR_MESSAGE);
            Ok(ExitCode::FAILURE)
        }
    }
}
