mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use search_core::{Caller, ProcedureUpdate};
use tracing::Level;

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(command_line.verbose))
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::load(command_line.config.as_deref())
        .context("Load configuration error")?;

    let username = command_line.user.clone().unwrap_or_else(|| cfg.default_user.clone());
    let caller = if command_line.superuser {
        Caller::superuser(username)
    } else {
        Caller::new(username, command_line.role)
    };

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Parse { file, pretty } => Box::new(command::ParseCommand::new(file, pretty)),
            cli::Commands::Convert { file, output } => {
                Box::new(command::ConvertCommand::new(file, output))
            }
            cli::Commands::List { json } => Box::new(command::ListCommand::new(cfg, caller, json)),
            cli::Commands::Show { id, json } => {
                Box::new(command::ShowCommand::new(cfg, caller, id, json))
            }
            cli::Commands::Search { query, json } => {
                Box::new(command::SearchCommand::new(cfg, caller, query, json))
            }
            cli::Commands::Upload { file, fields } => {
                let options = command::upload::UploadOptions {
                    name: fields.name,
                    icon: fields.icon,
                    description: fields.description,
                    private: fields.private,
                };
                Box::new(command::UploadCommand::new(cfg, caller, file, options))
            }
            cli::Commands::Edit { id, file, markup } => {
                Box::new(command::EditCommand::new(cfg, caller, id, file, markup))
            }
            cli::Commands::Update { id, name, icon, description, public, private } => {
                let update = ProcedureUpdate {
                    name,
                    icon,
                    description,
                    is_public: cli::visibility(public, private),
                };
                Box::new(command::UpdateCommand::new(cfg, caller, id, update))
            }
            cli::Commands::Delete { id } => Box::new(command::DeleteCommand::new(cfg, caller, id)),
            cli::Commands::Download { id, output } => {
                Box::new(command::DownloadCommand::new(cfg, caller, id, output))
            }
            cli::Commands::InitSamples => Box::new(command::InitSamplesCommand::new(cfg, caller)),
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
