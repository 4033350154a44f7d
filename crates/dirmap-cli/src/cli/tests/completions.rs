use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_completions() {
    match parse(&["dirmap", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_unknown_shell() {
    assert!(Cli::try_parse_from(["dirmap", "completions", "cmd"]).is_err());
}
