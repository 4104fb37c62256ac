mod check;
mod config;
mod setup;
mod views;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use check::{check, Submission};
use config::AppConfig;
use setup::set_up_tracing;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    set_up_tracing(&config);

    let routes = views::routes(&config)?;
    tracing::debug!(base = %routes.base(), "routes registered");

    let submission: Submission = serde_json::from_reader(std::io::stdin().lock())
        .context("failed to read a form submission from stdin")?;
    let report = check(&routes, submission)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
