use addon_version_compare::{parse, Part, VersionString};
use clap::Command;
use clap::arg;
use anyhow::Result;

pub fn args() -> Command {
    Command::new("parse")
        .about("Print the breakdown of versions as json, one object per line")
        .arg(arg!(versions: [version]... "Versions to break down (default: one per line of stdin)"))
        .arg(arg!(--filled "Print the breakdown with defaults filled in")
            .conflicts_with("wildcard")
        )
        .arg(arg!(--wildcard <number> "Read '*' as this number instead of \"*\"")
            .value_parser(clap::value_parser!(u64))
        )
}

pub fn breakdown_json(version: &str, filled: bool, wildcard: Option<u64>) -> Result<serde_json::Value> {

    let breakdown = if filled {
        serde_json::to_value(VersionString::new(version).breakdown())?
    } else {
        let wildcard = wildcard.map_or(Part::Wildcard, Part::Number);
        serde_json::to_value(parse(version, wildcard))?
    };

    Ok(serde_json::json!({
        "version": version,
        "breakdown": breakdown,
    }))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let versions = crate::versions_arg(matches)?;
    let filled = matches.get_flag("filled");
    let wildcard = matches.get_one::<u64>("wildcard").copied();

    for v in &versions {
        println!("{}", breakdown_json(v, filled, wildcard)?);
    }

    Ok(())
}
