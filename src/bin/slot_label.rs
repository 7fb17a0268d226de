use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use slotchrono::humanize;

use std::io::{self, BufRead, Write};

fn cli() -> Command {
    Command::new("slot_label")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns event identifiers such as `1_etapa_gt3_q2_final` into display titles")
        .arg(
            Arg::new("IDENTIFIER")
                .action(ArgAction::Append)
                .help("Identifiers to humanize. Reads one per line from stdin when omitted."),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.get_many::<String>("IDENTIFIER") {
        Some(identifiers) => {
            for identifier in identifiers {
                writeln!(out, "{}", humanize(identifier))?;
            }
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read identifier from stdin")?;
                writeln!(out, "{}", humanize(line.trim()))?;
            }
        }
    }

    Ok(())
}
