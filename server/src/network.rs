//! Server network layer: TCP listener and per-connection task spawning

use crate::config::ServerConfig;
use crate::game::GameState;
use crate::session::Session;
use log::{info, warn};
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};

/// Startup failures. Nothing after startup is fatal to the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read dictionary {}: {source}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Accepts connections and runs one session task per client
pub struct Server {
    listener: TcpListener,
    game: GameState,
}

impl Server {
    pub async fn new(config: &ServerConfig, game: GameState) -> Result<Self, ServerError> {
        let addr = config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        match listener.local_addr() {
            Ok(local) => info!("Server listening on {}", local),
            Err(_) => info!("Server listening on {}", addr),
        }

        Ok(Server { listener, game })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop. Never returns; sessions are spawned and not awaited.
    pub async fn run(&self) {
        info!(
            "Serving a {}x{} board, word checking {}",
            self.game.rows(),
            self.game.columns(),
            if self.game.dictionary().is_present() {
                "enabled"
            } else {
                "disabled"
            }
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    tokio::spawn(handle_connection(stream, addr, self.game.clone()));
                }
                Err(e) => {
                    warn!("Error accepting connection: {}", e);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
            }
        }
    }
}

async fn handle_connection(stream: TcpStream, addr: SocketAddr, game: GameState) {
    info!("Client connected from {}", addr);

    match Session::new(stream, game).run().await {
        Ok(()) => info!("Client {} disconnected", addr),
        Err(e) => warn!("Connection to {} closed with error: {}", addr, e),
    }
}
