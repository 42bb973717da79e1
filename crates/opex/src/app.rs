use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("opex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep opex settings and engine option files in step with their defaults")
        .long_about("opex reconciles its JSON settings file against the default settings tree and each engine's option override file against the options the engine reports. Missing entries are added for you to edit; only values that differ from the defaults are used.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .short('s')
                .help("Settings file (overrides OPEX_SETTINGS_FILE, default: opex-settings.json)")
                .global(true),
        )
        .arg(
            Arg::new("defaults")
                .long("defaults")
                .short('d')
                .help("Default settings file (overrides OPEX_DEFAULT_SETTINGS_FILE)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("settings")
                .about("Reconcile the settings file and print the resolved settings")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Reconcile the settings file and check the engine list"),
        )
        .subcommand(
            Command::new("options")
                .about("Reconcile every engine's option file and print its overrides")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}
