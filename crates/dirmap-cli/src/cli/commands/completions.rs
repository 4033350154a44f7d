//! `dirmap completions <shell>` – print a completion script to stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{self, Write};

use crate::cli::Cli;

pub fn run_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let mut stdout = io::stdout().lock();
    clap_complete::generate(shell, &mut cmd, "dirmap", &mut stdout);
    stdout.flush()?;
    Ok(())
}
