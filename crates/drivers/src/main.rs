mod cli;
mod config;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};
use config::AppConfig;
use platebook_adapters::{
    present_origin, present_page_row, InlinePageSource, JsonPageSource, SiteLocation,
};
use platebook_application::PageLoader;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = AppConfig::from_cli(&cli);

    match run_command(cli.command.unwrap_or(Commands::Ui), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn build_page_loader(site: &SiteLocation, config: &AppConfig) -> Result<PageLoader, CommandError> {
    let data = site
        .join(&config.data_path)
        .map_err(|error| CommandError::Usage(format!("invalid data path: {error}")))?;
    let document = site
        .join(&config.document_path)
        .map_err(|error| CommandError::Usage(format!("invalid document path: {error}")))?;

    Ok(PageLoader::new(
        Box::new(JsonPageSource::new(data)),
        Box::new(InlinePageSource::new(
            document,
            config.inline_element_id.clone(),
        )),
    ))
}

fn run_command(command: Commands, config: &AppConfig) -> Result<(), CommandError> {
    let site = SiteLocation::parse(&config.site)
        .map_err(|error| CommandError::Usage(format!("invalid site: {error}")))?;
    let loader = build_page_loader(&site, config)?;
    info!(site = %site.base(), ?command, "starting platebook");

    match command {
        Commands::Ui => ui::launch_window(config, site, loader).map_err(CommandError::Runtime),
        Commands::List => {
            let loaded = loader
                .load()
                .map_err(|error| CommandError::Runtime(format!("load failed: {error}")))?;
            println!(
                "{}",
                present_origin(loaded.origin, loaded.document.pages.len())
            );
            for (position, page) in loaded.document.pages.iter().enumerate() {
                println!("{}", present_page_row(position, page));
            }
            Ok(())
        }
    }
}
