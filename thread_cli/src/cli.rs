//! Command line arguments for the thread length calculator.

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use thread_core::errors::ThreadResult;
use thread_core::spacing::IronSpacing;

#[derive(Parser, Debug)]
#[command(
    name = "thread_cli",
    version,
    about = "Stitchwise - thread length calculator for hand-stitched leather",
    long_about = "Work out how much thread a saddle-stitched seam needs.\n\n\
                  Values are entered as text and cleaned the same way the GUI cleans them:\n\
                  stray characters are dropped and hole counts lose any decimals.\n\
                  Missing hole count or thickness is prompted for on a terminal."
)]
pub struct Cli {
    /// Number of sewing holes along the seam.
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    pub holes: Option<String>,

    /// Seam length in mm; the hole count is derived from the spacing.
    #[arg(long, value_name = "MM", conflicts_with = "holes")]
    pub distance: Option<u32>,

    /// Iron spacing in mm (one of the catalog values, see --list-spacings).
    #[arg(long, value_name = "MM", value_parser = parse_spacing)]
    pub spacing: Option<IronSpacing>,

    /// Leather thickness in mm.
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    pub thickness: Option<String>,

    /// Extra thread for knotting and finishing in mm (default: 200).
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    pub finishing: Option<String>,

    /// Print results and errors as JSON.
    #[arg(long)]
    pub json: bool,

    /// List the supported iron spacings and exit.
    #[arg(long = "list-spacings")]
    pub list_spacings: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

fn parse_spacing(value: &str) -> ThreadResult<IronSpacing> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_full_invocation() {
        let cli = Cli::try_parse_from([
            "thread_cli", "--holes", "10", "--spacing", "3.38 mm", "--thickness", "2.0", "--json",
        ])
        .unwrap();
        assert_eq!(cli.holes.as_deref(), Some("10"));
        assert_eq!(cli.spacing, Some(IronSpacing::Mm3_38));
        assert_eq!(cli.thickness.as_deref(), Some("2.0"));
        assert!(cli.json);
    }

    #[test]
    fn test_rejects_unknown_spacing() {
        assert!(Cli::try_parse_from(["thread_cli", "--spacing", "7.5"]).is_err());
    }

    #[test]
    fn test_holes_and_distance_conflict() {
        assert!(Cli::try_parse_from(["thread_cli", "--holes", "10", "--distance", "100"]).is_err());
    }
}
