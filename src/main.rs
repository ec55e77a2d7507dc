use clap::Parser;
use ddwebhook::config::config_manager::ConfigManager;
use ddwebhook::enums::commands::Commands;
use ddwebhook::errors::ErrorHandler;
use ddwebhook::logger::init_logging;
use ddwebhook::structs::cli::Cli;
use ddwebhook::structs::config::config::Config;
use ddwebhook::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.command {
        Commands::Init | Commands::Schema | Commands::Validate { .. } => Config::default(),
        _ => ConfigManager::load().inspect_err(ErrorHandler::handle_error)?,
    };

    let mut runner = CommandRunner::new(config, cli.state);
    runner
        .run_command(cli.command)
        .await
        .inspect_err(ErrorHandler::handle_error)?;

    Ok(())
}
