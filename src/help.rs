use crate::templates::TemplateStore;
use crate::Opts;
use clap::{Command, CommandFactory};

const EXAMPLES: [&str; 3] = [
    r#"$ license-generator install bsd -y 2014 -n "John Doe" -e txt"#,
    r#"$ license-generator i mit -y 2014 -n "John Doe""#,
    "$ license-generator view bsd",
];

/// The top-level command with the install options, available licenses and examples appended.
pub fn command(store: &TemplateStore) -> Command {
    let licenses = store.licenses().unwrap_or_else(|err| {
        log::warn!("could not list licenses: {err:#}");
        Vec::new()
    });

    Opts::command().after_help(after_help(&licenses))
}

pub fn after_help(licenses: &[String]) -> String {
    let mut help = String::new();

    help.push_str("Install options:\n");
    help.push_str("    -y, --year       The year to use. Example 2014.\n");
    help.push_str("    -n, --fullname   The fullname to use in the license.\n");
    help.push_str("    -p, --project    The name of the project to use in the license.\n");
    help.push_str(
        "    -e, --extension  The file extension for the license. Example: txt. Defaults to no extension.\n",
    );

    help.push_str("\nAvailable licenses:\n");
    for license in licenses {
        help.push_str(&format!("    {license}\n"));
    }

    help.push_str("\nExamples:\n");
    for example in EXAMPLES {
        help.push_str(&format!("    {example}\n"));
    }

    help
}
