use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use worklog::commands::{Arguments, Commands};
use worklog::config;

mod commands;

fn main() -> Result<()> {
    dotenv().ok();
    let args = Arguments::parse();

    stderrlog::new()
        .quiet(args.quiet)
        .verbosity(args.verbose as usize + 2)
        .init()?;

    match args.command {
        Commands::Setup => commands::setup()?,
        command => {
            // settings are loaded once here and injected into the command
            let settings = config::load_settings()?;
            match command {
                Commands::Start => commands::start(settings)?,
                Commands::End => commands::end(settings)?,
                Commands::Update(update) => commands::update(settings, update)?,
                Commands::Break(take_break) => commands::take_break(settings, take_break)?,
                Commands::Status(status) => commands::status(settings, status)?,
                Commands::Setup => unreachable!(),
            }
        }
    }
    Ok(())
}
