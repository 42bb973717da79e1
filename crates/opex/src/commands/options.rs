use clap::ArgMatches;
use tracing::{error, info};

use opex_core::{
    EngineOptionsError, OpexConfig, OpexError, Settings, UciLauncher, events,
    load_all_engine_options,
};

pub(crate) fn handle_options_command(
    sub_matches: &ArgMatches,
    config: &OpexConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = sub_matches.get_flag("json");
    info!(
        event = "cli.options_started",
        settings_file = %config.settings_file.display(),
        json_output = json_output
    );

    let settings = match config.load_settings().and_then(|tree| Settings::from_tree(&tree)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            error!(event = "cli.options_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let engine_options = match load_all_engine_options(&settings, &UciLauncher) {
        Ok(engine_options) => engine_options,
        Err(e) => {
            report_engine_options_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&engine_options)?);
    } else {
        for (nickname, overrides) in &engine_options {
            println!("{}:", nickname);
            if overrides.is_empty() {
                println!("  (engine defaults)");
            }
            for (name, value) in overrides {
                println!("  {}={}", name, value);
            }
        }
    }

    info!(
        event = "cli.options_completed",
        engine_count = engine_options.len()
    );
    Ok(())
}

fn report_engine_options_error(e: &EngineOptionsError) {
    eprintln!("Error: {}", e);
    if e.is_user_error() {
        eprintln!("Tip: Check the engine paths in the settings file and the engine option files.");
    }
    error!(
        event = "cli.options_failed",
        error = %e,
        error_code = e.error_code()
    );
    events::log_app_error(e);
}
