use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::domain::menu::UnknownCategory;
use crate::domain::{ApiResult, MenuCategory, MenuDetail, MenuSummary};
use crate::interface_adapters::state::AppState;

/// Command line client for the sidedish menu backend.
#[derive(Debug, Parser)]
#[command(name = "sidedish", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the menu of one category (main, soup or side).
    Menu {
        #[arg(value_parser = parse_category)]
        category: MenuCategory,
    },
    /// Show the detail record behind a menu hash.
    Detail { hash: String },
}

fn parse_category(value: &str) -> Result<MenuCategory, UnknownCategory> {
    value.parse()
}

// What a command produced, printed as JSON by the runtime.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Menu(Vec<MenuSummary>),
    Detail(MenuDetail),
}

pub async fn execute(state: &AppState, command: Command) -> ApiResult<CommandOutput> {
    match command {
        Command::Menu { category } => {
            let menu = state.menu.load_menu(category).await?;
            tracing::info!(%category, items = menu.len(), "menu listed");
            Ok(CommandOutput::Menu(menu))
        }
        Command::Detail { hash } => {
            let detail = state.menu.load_detail(&hash).await?;
            Ok(CommandOutput::Detail(detail))
        }
    }
}
