use addon_version_compare::version_int;
use clap::Command;
use clap::arg;
use anyhow::Result;

pub fn args() -> Command {
    Command::new("int")
        .about("Print the legacy integer encoding of versions")
        .long_about("Print the legacy integer encoding of versions. \
            Minor numbers are capped at 99, so distinct versions can share an integer.")
        .arg(arg!(versions: [version]... "Versions to encode (default: one per line of stdin)"))
}

pub fn int_line(version: &str) -> String {
    format!("{}\t{}", version, version_int(version))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    for v in crate::versions_arg(matches)? {
        println!("{}", int_line(&v));
    }

    Ok(())
}
