use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use vpnode_core::config_ops;

use crate::home::resolve_home;

pub(crate) fn handle_config_command(
    root_matches: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let home = resolve_home(root_matches)?;

    match matches.subcommand() {
        Some(("init", sub_matches)) => handle_init(&home, sub_matches),
        Some(("show", sub_matches)) => handle_show(&home, sub_matches),
        Some(("set", sub_matches)) => handle_set(&home, sub_matches),
        _ => {
            error!(event = "cli.config.subcommand_unknown");
            Err("Unknown config subcommand".into())
        }
    }
}

fn handle_init(home: &Path, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let force = matches.get_flag("force");
    info!(event = "cli.config_init_started", home = %home.display(), force = force);

    match config_ops::init_config(home, force) {
        Ok(path) => {
            println!("Initialized default configuration at {}", path.display());
            info!(event = "cli.config_init_completed", path = %path.display());
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.config_init_failed", error = %e);
            Err(e.into())
        }
    }
}

fn handle_show(home: &Path, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.config_show_started", home = %home.display(), json = json_output);

    let output = if json_output {
        config_ops::get_config(home)
            .map_err(Box::<dyn std::error::Error>::from)
            .and_then(|config| Ok(serde_json::to_string_pretty(&config)?))
    } else {
        config_ops::show_config(home).map_err(Box::<dyn std::error::Error>::from)
    };

    match output {
        Ok(rendered) => {
            println!("{}", rendered.trim_end());
            info!(event = "cli.config_show_completed");
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.config_show_failed", error = %e);
            Err(e)
        }
    }
}

fn handle_set(home: &Path, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("key")
        .ok_or("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .ok_or("Value argument is required")?;

    info!(event = "cli.config_set_started", home = %home.display(), key = %key);

    match config_ops::set_config(home, key, value) {
        Ok(_) => {
            println!("Set {} = {}", key, value);
            info!(event = "cli.config_set_completed", key = %key);
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.config_set_failed", key = %key, error = %e);
            Err(e.into())
        }
    }
}
