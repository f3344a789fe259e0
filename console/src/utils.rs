use std::fs::File;
use std::io::{
    stdout,
    BufWriter,
    Write,
};
use std::path::Path;

use anyhow::Context;
use clap::{
    ArgAction,
    Args,
    ValueEnum,
};
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short = 'v',
        long,
        action = ArgAction::Count,
        help_heading = "GENERAL",
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace). \
                RUST_LOG takes precedence when set."
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long,
        default_value_t = false,
        conflicts_with = "verbose",
        help_heading = "GENERAL",
        help = "Only log errors and do not print the run summary."
    )]
    pub quiet: bool,
}

impl UtilsArgs {
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn setup(&self) -> anyhow::Result<()> {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(self.level_filter());
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder
            .try_init()
            .context("Failed to initialize logger")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Tsv,
    Json,
}

/// Opens `path` for writing, or stdout when no path is given.
pub(crate) fn init_writer(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("Could not create output file {}", path.display())
            })?;
            Ok(Box::new(BufWriter::new(file)))
        },
        None => Ok(Box::new(BufWriter::new(stdout()))),
    }
}

pub(crate) fn check_input_file(path: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(
        path.exists(),
        "Path {} does not exist.",
        path.display()
    );
    anyhow::ensure!(
        path.is_file(),
        "Path {} is not a file.",
        path.display()
    );
    Ok(())
}
