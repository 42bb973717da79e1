use clap::ArgMatches;
use tracing::error;

use opex_core::{OpexConfig, events};

mod check;
mod options;
mod settings;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = resolve_config(matches);

    let result = match matches.subcommand() {
        Some(("settings", sub_matches)) => settings::handle_settings_command(sub_matches, &config),
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches, &config),
        Some(("options", sub_matches)) => options::handle_options_command(sub_matches, &config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

/// Environment configuration with CLI flags applied on top.
fn resolve_config(matches: &ArgMatches) -> OpexConfig {
    let mut config = OpexConfig::from_env();
    if let Some(path) = matches.get_one::<String>("settings") {
        config = config.with_settings_file(path);
    }
    if let Some(path) = matches.get_one::<String>("defaults") {
        config = config.with_default_settings_file(path);
    }
    config
}
