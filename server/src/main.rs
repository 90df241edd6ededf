use clap::Parser;
use log::{error, info};
use server::config::{Args, ServerConfig};
use server::dictionary::Dictionary;
use server::game::GameState;
use server::network::{Server, ServerError};

/// Main-method of the application.
/// Parses command-line arguments, loads the optional word list and serves the board until interrupted.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let config = ServerConfig::from(Args::parse());

    let server = match start(&config).await {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    tokio::select! {
        _ = server.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}

/// Loads the word list and binds the listener.
async fn start(config: &ServerConfig) -> Result<Server, ServerError> {
    let dictionary =
        Dictionary::load(&config.dictionary_path).map_err(|source| ServerError::Dictionary {
            path: config.dictionary_path.clone(),
            source,
        })?;

    let game = GameState::new(config.rows.get(), config.columns.get(), dictionary);
    Server::new(config, game).await
}
