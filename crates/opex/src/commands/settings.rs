use clap::ArgMatches;
use tracing::{error, info};

use opex_core::settings::settings_to_string;
use opex_core::{OpexConfig, events};

pub(crate) fn handle_settings_command(
    sub_matches: &ArgMatches,
    config: &OpexConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = sub_matches.get_flag("json");
    info!(
        event = "cli.settings_started",
        settings_file = %config.settings_file.display(),
        json_output = json_output
    );

    let tree = match config.load_settings() {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: {}", e);
            error!(event = "cli.settings_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", settings_to_string(&tree)?);
    } else {
        print_settings(&tree);
    }

    info!(event = "cli.settings_completed");
    Ok(())
}

fn print_settings(tree: &serde_json::Value) {
    let text = |key: &str| tree.get(key).and_then(|v| v.as_str()).unwrap_or_default();

    println!("Data directory:           {}", text("data_directory"));
    println!("Engine options directory: {}", text("engine_options_directory"));

    let engines = tree
        .get("engines")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    if engines.is_empty() {
        println!("Engines:                  (none)");
        return;
    }

    println!("Engines:");
    for engine in engines {
        let field = |key: &str| engine.get(key).and_then(|v| v.as_str()).unwrap_or_default();
        println!("  {:<20} {}", field("nickname"), field("path"));
    }
}
