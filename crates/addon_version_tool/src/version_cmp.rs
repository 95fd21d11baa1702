use addon_version_compare::VersionString;
use anyhow::Context;
use anyhow::Result;
use clap::Command;
use clap::arg;
use std::cmp::Ordering;

pub fn args() -> Command {
    Command::new("cmp")
        .about("Compare two versions, print <, = or >")
        .arg(arg!(<left> "Left version"))
        .arg(arg!(<right> "Right version"))
        .arg(arg!(--"exit-code" "Also exit with 0 when equal, 1 when less, 2 when greater"))
}

pub fn compare(left: &str, right: &str) -> Ordering {
    VersionString::new(left).cmp(&VersionString::new(right))
}

pub fn symbol(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn exit_code(ord: Ordering) -> i32 {
    match ord {
        Ordering::Equal => 0,
        Ordering::Less => 1,
        Ordering::Greater => 2,
    }
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let left = matches.get_one::<String>("left").context("left version expected")?;
    let right = matches.get_one::<String>("right").context("right version expected")?;

    crate::warn_if_zero(left);
    crate::warn_if_zero(right);

    let ord = compare(left, right);
    println!("{}", symbol(ord));

    if matches.get_flag("exit-code") {
        std::process::exit(exit_code(ord));
    }

    Ok(())
}
