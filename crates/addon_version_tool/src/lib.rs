use addon_version_compare::{parse, Part};
use anyhow::Result;
use clap::Command;
use std::io::BufRead;

mod version_cmp;
mod version_int;
mod version_parse;
mod version_sort;

pub fn get_cli() -> Command {
    build_cli(Command::new("addon-version")
        .about("Parse, compare and sort add-on version strings"))
}

pub fn build_cli(cmd: clap::Command) -> clap::Command {
    cmd.subcommand(version_sort::args())
        .subcommand(version_parse::args())
        .subcommand(version_int::args())
        .subcommand(version_cmp::args())
}

pub fn main_cli(matches: &clap::ArgMatches) -> Result<()> {

    match matches.subcommand() {

        Some(("sort", matches)) => {
            return version_sort::main(matches);
        }

        Some(("parse", matches)) => {
            return version_parse::main(matches);
        }

        Some(("int", matches)) => {
            return version_int::main(matches);
        }

        Some(("cmp", matches)) => {
            return version_cmp::main(matches);
        }

        _ =>  {
            anyhow::bail!("no subcmd");
        }
    }
}

/// The "versions" arguments, or one version per line of stdin when there are none.
fn versions_arg(matches: &clap::ArgMatches) -> Result<Vec<String>> {

    let versions = match matches.get_many::<String>("versions") {
        Some(versions) => versions.cloned().collect::<Vec<_>>(),
        None => {
            let mut versions = Vec::new();
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    versions.push(line);
                }
            }
            versions
        }
    };

    for v in &versions {
        warn_if_zero(v);
    }

    Ok(versions)
}

// garbage is still a version (the zero version), but it is probably a mistake
fn warn_if_zero(v: &str) {
    if parse(v, Part::Wildcard).major.is_absent() {
        tracing::warn!("no leading version number in {v:?}, treating it as 0");
    }
}
