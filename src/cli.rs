use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitgraph")]
#[command(about = "GitHub-style contribution graph for local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to the repository list file")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    Scan {
        #[arg(help = "Folder to scan recursively for git repositories")]
        folder: PathBuf,
    },
    Stats {
        #[arg(long, help = "Author email to match")]
        email: String,

        #[arg(long, help = "Disable colored output")]
        no_color: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Scan { folder } => crate::scan::exec(self.common, folder),
            Commands::Stats { email, no_color } => {
                crate::graph::exec(self.common, email, no_color)
            }
        }
    }
}
