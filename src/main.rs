use anyhow::Result;
use clap::{Arg, Command};

use barstat::commands::{self, StatusView};

fn main() -> Result<()> {
    barstat::init_logging();

    let mut cli = Command::new("barstat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Status bar modules for containers and clusters")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(
            Command::new("tools")
                .about("Write a manifest of installed brew packages and shell aliases")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Manifest path (default: ~/.config/cursor/generated/tools.yaml)"),
                ),
        );

    for view in StatusView::all() {
        cli = cli.subcommand(Command::new(view.name()).about(view.about()));
    }

    let matches = cli.get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("version", _)) => commands::version(),
        Some(("tools", sub_matches)) => commands::tools(sub_matches),
        Some((name, _)) => match StatusView::from_name(name) {
            Some(view) => commands::status::execute(view),
            None => {
                println!("Use 'barstat --help' for more information.");
                Ok(())
            }
        },
        None => {
            println!("Use 'barstat --help' for more information.");
            Ok(())
        }
    }
}
