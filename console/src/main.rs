mod demo;
mod detect;
mod utils;

use clap::{
    Parser,
    Subcommand,
};
use demo::DemoArgs;
use detect::DetectArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Detect hidden repeats in a sequence file or string.
    Detect {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  DetectArgs,
    },

    /// Run detection on the built-in three-chunk example.
    Demo {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  DemoArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Detect { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Demo { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_parse() {
        let cli =
            Cli::try_parse_from(["repsplorer", "demo", "-vv", "--tau1", "0.005"]).unwrap();
        match cli.command {
            MainMenu::Demo { utils, .. } => assert_eq!(utils.verbose, 2),
            other => panic!("unexpected command {:?}", other),
        }
        let cli =
            Cli::try_parse_from(["repsplorer", "detect", "-s", "ACGT", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, MainMenu::Detect { .. }));
    }

    #[test]
    fn quiet_flag() {
        let cli = Cli::try_parse_from(["repsplorer", "detect", "-q", "-s", "ACGT"]).unwrap();
        match cli.command {
            MainMenu::Detect { utils, .. } => assert!(utils.quiet),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["repsplorer", "demo", "-q", "-v"]).is_err());
    }
}
