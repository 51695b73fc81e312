use clap::Parser;
use colored::*;
use eyre::{Result, eyre};
use log::info;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use toolrack::tools::{CategoryId, ToolCatalog};

fn setup_logging(config: &Config) -> Result<()> {
    // RUST_LOG wins over the configured level
    let default_level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Loading tool catalog from {}", config.catalog.path.display());
    let catalog = ToolCatalog::load_or_empty(&config.catalog.path);

    if cli.is_verbose() {
        println!("{}", format!("{} tools loaded", catalog.len()).yellow());
    }

    match &cli.command {
        None => handle_categories_command(&catalog, false),
        Some(Commands::List { category, json }) => {
            handle_list_command(&catalog, category.as_deref(), *json)
        }
        Some(Commands::Categories { json }) => handle_categories_command(&catalog, *json),
        Some(Commands::Show { provider, json }) => handle_show_command(&catalog, provider, *json),
    }
}

fn handle_list_command(catalog: &ToolCatalog, category: Option<&str>, json: bool) -> Result<()> {
    let tools = match category {
        Some(raw) => {
            let id = CategoryId::from_str(raw).ok_or_else(|| eyre!("Unknown category: {}", raw))?;
            catalog.tools_by_category(id)
        }
        None => catalog.all_tools(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(tools)?);
        return Ok(());
    }

    println!("{} {}", "Tools:".cyan(), tools.len());
    for tool in tools {
        println!(
            "  {:<28} {:<28} [{}]",
            tool.provider.green(),
            tool.name,
            tool.category_id
        );
    }
    Ok(())
}

fn handle_categories_command(catalog: &ToolCatalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.categories())?);
        return Ok(());
    }

    println!("{} {}", "Categories:".cyan(), catalog.categories().len());
    for category in catalog.categories() {
        println!(
            "  {:<16} {:>3} {}",
            category.id.as_str().green(),
            category.tools.len(),
            category.description
        );
    }
    Ok(())
}

fn handle_show_command(catalog: &ToolCatalog, provider: &str, json: bool) -> Result<()> {
    let tool = catalog
        .tool_by_provider(provider)
        .ok_or_else(|| eyre!("No tool with provider '{}'", provider))?;

    if json {
        println!("{}", serde_json::to_string_pretty(tool)?);
        return Ok(());
    }

    println!("{} {}", "Name:".cyan(), tool.name);
    println!("{} {}", "Id:".cyan(), tool.id);
    println!("{} {}", "Provider:".cyan(), tool.provider);
    println!("{} {}", "Category:".cyan(), tool.category_id);
    println!("{} {}", "Icon:".cyan(), tool.icon.asset());
    println!("{} {}", "Tags:".cyan(), tool.tags.join(", "));
    println!("{} {}", "Description:".cyan(), tool.description);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;
    setup_logging(&config)?;
    run_application(&cli, &config)
}
