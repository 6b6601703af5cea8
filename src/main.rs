mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::calculate_cmd::calculate_command;
use crate::commands::export_cmd::export_command;
use crate::commands::init_cmd::init_command;
use crate::commands::simulate_cmd::simulate_command;
use clap::{CommandFactory, Parser};
use tracing::error;

fn main() {
    let args = CliArgs::parse();
    logging::setup_logging(&args.log_level);

    let outcome = match args.command {
        Commands::Init { output } => init_command(&output),
        Commands::Calculate {
            input,
            output,
            format,
        } => calculate_command(input.as_deref(), output.as_deref(), format),
        Commands::Simulate {
            input,
            prices,
            output,
            format,
        } => simulate_command(input.as_deref(), &prices, output.as_deref(), format),
        Commands::Export {
            input,
            prices,
            output,
        } => export_command(input.as_deref(), &prices, &output),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
