use clap::Args;
use console::style;
use itertools::Itertools;
use repsplorer::prelude::*;

use crate::detect::{
    print_summary,
    ConfigArgs,
};
use crate::utils::UtilsArgs;

const PREVIEW_LENGTH: usize = 50;

#[derive(Args, Debug, Clone)]
pub(crate) struct DemoArgs {
    #[arg(
        long,
        default_value_t = false,
        help = "Also print the segments after segmentation and after the \
                exact-word merge."
    )]
    stages: bool,

    #[clap(flatten)]
    config: ConfigArgs,
}

impl DemoArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let detector = RepeatDetector::try_new(self.config.to_config())?;
        let sequence = DEMO_SEQUENCE.as_bytes();

        println!(
            "Loaded sequence length: {}",
            style(sequence.len()).green()
        );
        println!("Preview: {}", preview(DEMO_SEQUENCE, PREVIEW_LENGTH));

        let stages = detector.run_stages(sequence)?;
        if self.stages {
            print_segments("Segmented", &stages.segmented);
            print_segments("Exact-word merged", &stages.exact_merged);
        }
        print_segments("Detected repeats", stages.final_segments());

        if !utils.quiet {
            print_summary(&stages.summary(detector.config()));
        }
        Ok(())
    }
}

fn preview(
    sequence: &str,
    length: usize,
) -> String {
    if sequence.len() > length {
        format!("{}...", &sequence[..length])
    }
    else {
        sequence.to_string()
    }
}

fn print_segments(
    title: &str,
    segments: &[Segment],
) {
    println!("{}", style(format!("{}:", title)).bold());
    println!("{}", segments.iter().join("\n"));
}
