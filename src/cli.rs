use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portfolio", version, about = "Portfolio resume and contact tooling")]
pub struct Cli {
    #[arg(long, short, global = true, help = "Log debug output to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the resume PDF and save it
    Resume {
        #[arg(long, help = "Directory to save into (default: PORTFOLIO_OUTPUT_DIR or .)")]
        out_dir: Option<PathBuf>,
        #[arg(long, help = "Resume record as JSON (default: the built-in record)")]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = false, help = "Stamp the current time as the creation date")]
        timestamp: bool,
    },
    /// Send a message through the site's contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        #[arg(long, help = "Site origin (default: PORTFOLIO_SITE_URL)")]
        site_url: Option<String>,
    },
    /// Open a pre-filled email in the default mail client
    EmailMe {
        #[arg(long, default_value_t = false, help = "Print the mailto link instead of opening it")]
        print: bool,
    },
}
