pub mod commands;

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flowtag")]
#[command(about = "Summarize flow-log traffic by port/protocol tag", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(value_name = "FLOW_LOGS", allow_hyphen_values = true, help = "Flow log CSV (14 columns, header line first)")]
    pub flow_logs: PathBuf,

    #[arg(value_name = "TAG_MAPPINGS", allow_hyphen_values = true, help = "Tag mapping CSV: dstport,protocol,tag")]
    pub tag_mappings: PathBuf,

    #[arg(value_name = "OUTPUT", allow_hyphen_values = true, help = "Report file to create or overwrite")]
    pub output: PathBuf,
}

impl Cli {
    /// Parse `program flow_logs tag_mappings output`, counting raw arguments.
    ///
    /// Returns `None` unless there are exactly three arguments after the
    /// program name; clap alone would let `--` through as an escape.
    pub fn parse_exact<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 4 {
            return None;
        }
        Cli::try_parse_from(args).ok()
    }

    /// One-line usage string for the wrong-argument-count path
    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_positionals() {
        let cli = Cli::try_parse_from(["flowtag", "flows.csv", "tags.csv", "out.csv"]).unwrap();
        assert_eq!(cli.flow_logs, PathBuf::from("flows.csv"));
        assert_eq!(cli.tag_mappings, PathBuf::from("tags.csv"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_wrong_argument_count_rejected() {
        assert!(Cli::try_parse_from(["flowtag", "flows.csv", "tags.csv"]).is_err());
        assert!(Cli::try_parse_from(["flowtag", "a", "b", "c", "d"]).is_err());
        assert!(Cli::try_parse_from(["flowtag", "--help"]).is_err());
    }

    #[test]
    fn test_parse_exact_counts_raw_arguments() {
        assert!(Cli::parse_exact(["flowtag", "--", "a", "b", "c"]).is_none());
        assert!(Cli::parse_exact(["flowtag", "a", "b"]).is_none());
        assert!(Cli::parse_exact(["flowtag", "--help"]).is_none());
        assert!(Cli::parse_exact(["flowtag", "a", "b", "c"]).is_some());
    }

    #[test]
    fn test_hyphen_leading_paths_are_positionals() {
        let cli = Cli::parse_exact(["flowtag", "-flows.csv", "tags.csv", "--out.csv"])
            .expect("three positionals");
        assert_eq!(cli.flow_logs, PathBuf::from("-flows.csv"));
        assert_eq!(cli.tag_mappings, PathBuf::from("tags.csv"));
        assert_eq!(cli.output, PathBuf::from("--out.csv"));
    }

    #[test]
    fn test_usage_names_arguments() {
        let usage = Cli::usage();
        assert!(usage.contains("<FLOW_LOGS>"));
        assert!(usage.contains("<TAG_MAPPINGS>"));
        assert!(usage.contains("<OUTPUT>"));
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }
}
