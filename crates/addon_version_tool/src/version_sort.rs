use addon_version_compare::VersionString;
use clap::Command;
use clap::arg;
use anyhow::Result;

pub fn args() -> Command {
    Command::new("sort")
        .about("Compare and sort versions")
        .long_about("Take a list of versions, sort and print them in descending order")
        .visible_alias("vc")
        .arg(arg!(versions: [version]... "Versions to compare and sort (default: one per line of stdin)"))
        .arg(arg!(--int "also print the legacy integer of each version"))
        .arg(arg!(--ascending "output in ascending order")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order (default)")
            .overrides_with("ascending")
        )
}

/// Sort and dedup, equal versions keep the first spelling seen.
pub fn sort_versions<I, S>(versions: I, descending: bool) -> Vec<VersionString>
where
    I: IntoIterator<Item = S>,
    S: Into<VersionString>,
{
    let mut versions = versions.into_iter().map(Into::into).collect::<Vec<_>>();

    versions.sort();
    versions.dedup();

    if descending {
        versions.reverse();
    }

    versions
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let versions = crate::versions_arg(matches)?;
    let descending = !matches.get_flag("ascending");
    let with_int = matches.get_flag("int");

    for v in sort_versions(versions, descending) {
        if with_int {
            println!("{}\t{}", v, v.version_int());
        } else {
            println!("{}", v);
        }
    }

    Ok(())
}
