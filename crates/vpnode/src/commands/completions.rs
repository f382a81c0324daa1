use std::io::Write;

use clap::ArgMatches;
use clap_complete::Shell;
use tracing::info;

use crate::app::build_cli;

/// Print the completion script for the requested shell to stdout.
pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = build_cli();
    let bin_name = cmd.get_name().to_string();
    let mut stdout = std::io::stdout().lock();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout);
    stdout.flush()?;

    info!(event = "cli.completions_generated", shell = %shell);
    Ok(())
}
