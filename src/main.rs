use dotenv::dotenv;

mod action;
mod card_api;
mod cli;
mod comparator;
mod config;
mod context;
mod error;
mod models;
mod opt;
mod render;
mod round;

use crate::card_api::YgoProDeckClient;
use crate::config::Settings;
use crate::error::Result;
use crate::opt::{DbgFlg, DebugIf};

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(err) = run().await {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    settings.dbg_if(DbgFlg::Api);

    let context = context::create_context()?;
    let source = YgoProDeckClient::new(&settings)?;

    println!("Guess the monster! Type `start` to begin, `help` for commands.");
    let mut game = cli::Game::new(source, context);
    cli::main(&mut game).await
}
