mod cli;
mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use portfolio::contact::{
    email_fallback, ContactForm, Field, HttpTransport, MailtoLink, SubmissionStatus,
    SystemLauncher,
};
use portfolio::resume::{DirectorySink, ResumeData, ResumeRenderer};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(log_filter(cli.verbose, &config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("portfolio v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Resume {
            out_dir,
            data,
            timestamp,
        } => resume(&config, out_dir, data, timestamp),
        Commands::Contact {
            name,
            email,
            subject,
            message,
            site_url,
        } => {
            let site_url = site_url.unwrap_or_else(|| config.site_url.clone());
            let transport = HttpTransport::new(&site_url, config.http_timeout)?;
            let form = ContactForm::new(transport);
            form.update_field(Field::Name, name);
            form.update_field(Field::Email, email);
            form.update_field(Field::Subject, subject);
            form.update_field(Field::Message, message);

            let status = form.submit().await;
            if let Some(line) = form.snapshot().status_line() {
                println!("{line}");
            }
            if status == SubmissionStatus::Error {
                bail!("contact form was not delivered to {site_url}");
            }
            Ok(())
        }
        Commands::EmailMe { print } => {
            if print {
                println!("{}", MailtoLink::portfolio());
            } else {
                let link = email_fallback(&SystemLauncher)?;
                println!("Opened {link}");
            }
            Ok(())
        }
    }
}

/// `--verbose` wins over `RUST_LOG`, which wins over the configured level
fn log_filter(verbose: bool, config: &Config) -> EnvFilter {
    if verbose {
        return EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME")));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
    })
}

fn resume(
    config: &Config,
    out_dir: Option<PathBuf>,
    data: Option<PathBuf>,
    timestamp: bool,
) -> Result<()> {
    let data = match data {
        Some(path) => ResumeData::from_json_file(&path)
            .with_context(|| format!("Failed to load resume data from {}", path.display()))?,
        None => ResumeData::builtin(),
    };

    let mut renderer = ResumeRenderer::new();
    if timestamp {
        renderer = renderer.with_creation_date(chrono::Local::now().into());
    }

    let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
    let path = renderer
        .generate(&data, &DirectorySink::new(out_dir))
        .context("Failed to generate resume")?;
    println!("{}", path.display());
    Ok(())
}
