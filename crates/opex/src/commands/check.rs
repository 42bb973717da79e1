use clap::ArgMatches;
use tracing::{error, info};

use opex_core::{OpexConfig, Settings, events};

pub(crate) fn handle_check_command(
    _sub_matches: &ArgMatches,
    config: &OpexConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        event = "cli.check_started",
        settings_file = %config.settings_file.display()
    );

    let settings = match config.load_settings().and_then(|tree| Settings::from_tree(&tree)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            error!(event = "cli.check_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    println!(
        "Settings OK: {} engine(s) configured",
        settings.engines.len()
    );
    for engine in &settings.engines {
        println!("  {:<20} {}", engine.nickname, engine.path);
    }

    info!(
        event = "cli.check_completed",
        engine_count = settings.engines.len()
    );
    Ok(())
}
