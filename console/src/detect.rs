use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use log::info;
use repsplorer::prelude::*;

use crate::utils::{
    check_input_file,
    init_writer,
    OutputFormat,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ConfigArgs {
    #[arg(
        short = 'L',
        long,
        default_value_t = 12,
        help_heading = "DETECTION ARGS",
        help = "Segment length. The sequence is cut into consecutive chunks of this \
                many symbols before merging."
    )]
    pub segment_length: usize,

    #[arg(
        short = 'K',
        long,
        default_value_t = 3,
        help_heading = "DETECTION ARGS",
        help = "Sub-period, i.e. the length of the representative word of a segment."
    )]
    pub period: usize,

    #[arg(
        long = "tau1",
        default_value_t = 0.1,
        help_heading = "DETECTION ARGS",
        help = "Weak threshold. A segment whose combined p-value is above it may be \
                absorbed as noise between two strong segments."
    )]
    pub weak_pvalue: PValueType,

    #[arg(
        long = "tau2",
        default_value_t = 0.01,
        help_heading = "DETECTION ARGS",
        help = "Strong threshold. Only segments whose combined p-value is below it \
                can anchor a noise merge."
    )]
    pub strong_pvalue: PValueType,

    #[arg(
        long,
        default_value_t = 0.05,
        help_heading = "DETECTION ARGS",
        help = "Significance level. Stored with the configuration, not used by any \
                merge decision."
    )]
    pub alpha: PValueType,
}

impl ConfigArgs {
    pub fn to_config(&self) -> RepeatConfig {
        RepeatConfig::new(
            self.segment_length,
            self.period,
            self.weak_pvalue,
            self.strong_pvalue,
            self.alpha,
        )
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct DetectArgs {
    #[arg(
        value_parser,
        required_unless_present = "sequence",
        conflicts_with = "sequence",
        help = "Plain-text file with the sequence. Whitespace and line breaks are \
                ignored."
    )]
    input: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Sequence given directly on the command line instead of a file."
    )]
    sequence: Option<String>,

    #[arg(
        short,
        long,
        default_value_t = false,
        help = "Upper-case the sequence before detection, so that soft-masked bases \
                are counted."
    )]
    uppercase: bool,

    #[arg(
        short = 'o',
        long,
        help = "Output file for the detected regions. Defaults to stdout."
    )]
    output: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Tsv,
        help = "Output format of the detected regions."
    )]
    format: OutputFormat,

    #[arg(
        long,
        help = "Write the effective configuration as JSON to this path."
    )]
    dump_config: Option<PathBuf>,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl DetectArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let config = self.config.to_config();
        if let Some(path) = &self.dump_config {
            let json = serde_json::to_string_pretty(&config)?;
            fs::write(path, json).with_context(|| {
                format!("Could not write configuration to {}", path.display())
            })?;
            info!("Configuration written to {}", path.display());
        }

        let sequence = prepare_sequence(&self.read_raw()?, self.uppercase);
        let detector = RepeatDetector::try_new(config)?;
        let stages = detector.run_stages(&sequence)?;

        let writer = init_writer(self.output.as_deref())?;
        write_regions(writer, &stages.regions(detector.config()), self.format)?;

        if !utils.quiet {
            print_summary(&stages.summary(detector.config()));
        }
        Ok(())
    }

    fn read_raw(&self) -> anyhow::Result<String> {
        match (&self.input, &self.sequence) {
            (_, Some(sequence)) => Ok(sequence.clone()),
            (Some(path), None) => {
                check_input_file(path)?;
                fs::read_to_string(path)
                    .with_context(|| format!("Could not read {}", path.display()))
            },
            (None, None) => anyhow::bail!("Either an input file or --sequence is required"),
        }
    }
}

pub(crate) fn write_regions<W: Write>(
    mut writer: W,
    regions: &[RepeatRegion],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Tsv => {
            let mut csv_writer = csv::WriterBuilder::default()
                .delimiter(b'\t')
                .has_headers(true)
                .from_writer(writer);
            for region in regions {
                csv_writer.serialize(region)?;
            }
            csv_writer.flush()?;
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, regions)?;
            writeln!(writer)?;
            writer.flush()?;
        },
    }
    Ok(())
}

pub(crate) fn print_summary(summary: &DetectionSummary) {
    eprintln!(
        "Processed {} symbols: {} segments, {} after exact-word merge, {} after \
         noise merge",
        style(summary.sequence_length).green(),
        summary.n_segments,
        summary.n_exact_merged,
        style(summary.n_final).green(),
    );
    eprintln!(
        "Final regions: {} strong, {} intermediate, {} weak",
        style(summary.n_strong).green(),
        summary.n_intermediate,
        style(summary.n_weak).red(),
    );
}
