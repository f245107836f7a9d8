//! Foodboard CLI — terminal front end for the food-plate dashboard.
//!
//! Each invocation mounts the dashboard against the configured API, runs one
//! action and prints the resulting list:
//!
//! ```bash
//! foodboard list
//! foodboard add --name Pizza --image https://img/pizza.png --price 30.00 --description Cheesy
//! foodboard edit 1 --price 32.00
//! foodboard toggle 1
//! foodboard delete 1
//! ```
//!
//! See `foodboard --help` for all available commands and options.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use foodboard_core::config::{FoodboardConfig, DEFAULT_CONFIG_FILE};
use foodboard_core::prelude::*;

#[derive(Parser)]
#[command(name = "foodboard", about = "Manage food plates on a Foodboard API", version)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// API base URL, overrides config and FOODBOARD_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Run against a seeded in-memory collection instead of the API
    #[arg(long, global = true)]
    memory: bool,

    /// Print the dashboard view as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all food plates
    List,

    /// Create a food plate
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: String,
    },

    /// Edit fields of a food plate
    Edit {
        id: FoodId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Flip availability of a food plate
    Toggle { id: FoodId },

    /// Delete a food plate
    Delete { id: FoodId },
}

impl Commands {
    fn into_action(self) -> commands::Action {
        match self {
            Commands::List => commands::Action::List,
            Commands::Add { name, image, price, description } => {
                commands::Action::Add(NewFoodPlate::new(name, image, price, description))
            }
            Commands::Edit { id, name, image, price, description } => {
                let edit = FoodPlateEdit { name, image, price, description, available: None };
                commands::Action::Edit(id, edit)
            }
            Commands::Toggle { id } => commands::Action::Toggle(id),
            Commands::Delete { id } => commands::Action::Delete(id),
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<FoodboardConfig> {
    let mut config = FoodboardConfig::load_from(&cli.config)?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

fn gateway(cli: &Cli, config: &FoodboardConfig) -> anyhow::Result<Arc<dyn RemoteGateway>> {
    if cli.memory {
        log::info!("Using in-memory collection");
        return Ok(Arc::new(InMemoryGateway::seeded(commands::sample_plates())));
    }
    Ok(Arc::new(HttpGateway::new(&config.api)?))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    foodboard_core::logging::init_logging(&config.logging);

    let gateway = gateway(&cli, &config)?;
    let mut dashboard = Dashboard::new(gateway);
    let json = cli.json;

    commands::run(&mut dashboard, cli.command.into_action()).await?;

    let view = dashboard.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", commands::render::table(&view));
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
