//! Server configuration and its command-line form.

use clap::Parser;
use shared::{DEFAULT_PORT, DICTIONARY_FILE};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Command-line arguments for the server binary
#[derive(Parser, Debug)]
#[command(author, version, about = "Concurrent word-placement game server")]
pub struct Args {
    /// Number of board rows
    pub rows: NonZeroUsize,

    /// Number of board columns
    pub columns: NonZeroUsize,

    /// Address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Word list used to check placements; word checking is off if the file is missing
    #[arg(short, long, default_value = DICTIONARY_FILE)]
    pub words: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rows: NonZeroUsize,
    pub columns: NonZeroUsize,
    pub dictionary_path: PathBuf,
}

impl ServerConfig {
    pub fn new(rows: NonZeroUsize, columns: NonZeroUsize) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            rows,
            columns,
            dictionary_path: PathBuf::from(DICTIONARY_FILE),
        }
    }

    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        ServerConfig::new(args.rows, args.columns)
            .with_address(args.host, args.port)
            .with_dictionary(args.words)
    }
}
