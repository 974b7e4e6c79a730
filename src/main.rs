use clap::{Arg, ArgMatches, Command};
use colored::*;
use std::process;

use voyage_cli::client::CatalogClient;
use voyage_cli::config::{get_endpoint, load_config, save_config};
use voyage_cli::constants::WARNING_COUNTRY;
use voyage_cli::error::VoyageResult;
use voyage_cli::interactive::handlers::run_interactive_mode;
use voyage_cli::logging::{init_logging, log_error, log_panic_info};

#[tokio::main]
async fn main() {
    let app = Command::new("voyage")
        .about("Voyage CLI - pick a continent and a country from the terminal")
        .version("0.1.0")
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .value_name("URL")
                .help("Base URL of the travel catalog API")
                .global(true)
                .required(false),
        )
        .subcommand(
            Command::new("config")
                .about("Configure the catalog endpoint")
                .arg(
                    Arg::new("set-endpoint")
                        .long("set-endpoint")
                        .value_name("URL")
                        .help("Persist a catalog endpoint override")
                        .required(false),
                )
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .help("Remove the persisted endpoint override")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the endpoint currently in effect")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("continents").about("List the continent catalog"))
        .subcommand(
            Command::new("countries")
                .about("List the country catalog")
                .arg(
                    Arg::new("continent")
                        .long("continent")
                        .value_name("CODE")
                        .help("Only show countries in this continent")
                        .required(false),
                ),
        );

    let matches = app.get_matches();

    if let Err(e) = init_logging() {
        eprintln!("{} failed to initialize logging: {}", "Warning:".yellow(), e);
    }
    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(get_endpoint);

    let result = match matches.subcommand() {
        Some(("config", sub_matches)) => configure(sub_matches).map_err(Into::into),
        Some(("continents", _)) => list_continents(&endpoint).await.map_err(Into::into),
        Some(("countries", sub_matches)) => {
            list_countries(&endpoint, sub_matches).await.map_err(Into::into)
        }
        _ => run_interactive_mode(endpoint).await,
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn configure(matches: &ArgMatches) -> VoyageResult<()> {
    if let Some(url) = matches.get_one::<String>("set-endpoint") {
        let mut config = load_config();
        config.endpoint = Some(url.clone());
        save_config(&config)?;
        println!("{} endpoint set to {}", "Saved:".green(), url.cyan());
        return Ok(());
    }

    if matches.get_flag("clear") {
        let mut config = load_config();
        config.endpoint = None;
        save_config(&config)?;
        println!("{} endpoint override removed", "Saved:".green());
        return Ok(());
    }

    // Default (and --show): report what would be used.
    println!("Endpoint: {}", get_endpoint().cyan());
    Ok(())
}

async fn list_continents(endpoint: &str) -> VoyageResult<()> {
    let client = CatalogClient::new(endpoint.to_string());
    let catalog = client.fetch_continents().await?;

    println!("{}", "Continents".bold());
    for (code, name) in &catalog {
        println!("  {}  {}", code.cyan(), name);
    }

    Ok(())
}

async fn list_countries(endpoint: &str, matches: &ArgMatches) -> VoyageResult<()> {
    let client = CatalogClient::new(endpoint.to_string());
    let catalog = client.fetch_countries().await?;
    let continent_filter = matches.get_one::<String>("continent");

    println!("{}", "Countries".bold());
    for (code, entry) in &catalog {
        if let Some(filter) = continent_filter {
            if &entry.continent != filter {
                continue;
            }
        }
        let warning = if code == WARNING_COUNTRY {
            " ⚠".red().to_string()
        } else {
            String::new()
        };
        println!(
            "  {}  {} ({}){}",
            code.cyan(),
            entry.name,
            entry.continent.dimmed(),
            warning
        );
    }

    Ok(())
}
