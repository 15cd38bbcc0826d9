use std::error::Error;

use clap::Parser;
use cli_presentation::CliPresentation;
use command_loop::{run_commands, spawn_stdin_reader};
use config::CliArgs;
use http_server::HttpGameServer;
use kittens_core::{pacing::TokioPacer, GameSession};
use log::{error, info};

mod cli_player;
mod cli_presentation;
mod command_loop;
mod config;
mod http_server;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    if let Err(err) = run(args).await {
        error!("client stopped: {}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let server = HttpGameServer::new(&args.server_url)?;
    let session = GameSession::new(
        server,
        CliPresentation::new(),
        TokioPacer,
        args.client_config(),
    );
    info!("connecting to {}", args.server_url);

    let mut input = spawn_stdin_reader();
    run_commands(&session, &mut input, args.name.clone()).await;
    Ok(())
}
