//! # Word-Placement Game Server Library
//!
//! This library provides the server for a shared-board word game played over
//! a plain text protocol. Any number of clients connect at once, place words
//! across or down on a single rows×columns board, and ask for the current
//! board at any time.
//!
//! ## Core Responsibilities
//!
//! ### Authoritative Board
//! The server owns the only copy of the board. Clients never hold state of
//! their own; every `board` command renders the live board.
//!
//! ### Placement Validation
//! Each placement is checked for length, geometry, lowercase letters and
//! collisions with existing letters. When a word list is loaded, every
//! horizontal and vertical run of two or more letters on the resulting board
//! must be a listed word. A rejected placement leaves the board untouched.
//!
//! ### Connection Handling
//! One task per accepted connection, no connection limit. A failing
//! connection ends only its own session.
//!
//! ## Architecture Design
//!
//! ### Single Board Lock
//! All board access goes through one exclusive lock held by
//! [`game::GameState`]. A placement takes the lock once for its whole
//! snapshot/validate/commit sequence and a render takes it once, so
//! operations are totally ordered and renders never observe a partial
//! placement. Socket I/O always happens outside the lock.
//!
//! ### Text Protocol
//! Commands are whitespace-delimited tokens; see the `shared` crate for the
//! scanner and the command set. Every rejection, malformed or invalid, is
//! answered with the same `Invalid command` line.
//!
//! ## Module Organization
//!
//! ### Board Module (`board`)
//! Fixed-size grid storage, snapshot/commit and the bordered rendering.
//!
//! ### Dictionary Module (`dictionary`)
//! Optional word list loaded once at startup.
//!
//! ### Placement Module (`placement`)
//! Bounds and character checks, run extraction and dictionary validation.
//!
//! ### Game Module (`game`)
//! The lock-guarded board and dictionary shared by all sessions.
//!
//! ### Session Module (`session`)
//! The per-connection prompt/command/response loop.
//!
//! ### Network Module (`network`)
//! TCP listener and session spawning.
//!
//! ### Config Module (`config`)
//! Command-line arguments and the resulting server configuration.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::config::ServerConfig;
//! use server::dictionary::Dictionary;
//! use server::game::GameState;
//! use server::network::Server;
//! use std::num::NonZeroUsize;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let size = NonZeroUsize::new(15).unwrap();
//!     let config = ServerConfig::new(size, size).with_address("127.0.0.1", 26022);
//!
//!     let dictionary = Dictionary::load(&config.dictionary_path)?;
//!     let game = GameState::new(config.rows.get(), config.columns.get(), dictionary);
//!
//!     let server = Server::new(&config, game).await?;
//!     server.run().await;
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod config;
pub mod dictionary;
pub mod game;
pub mod network;
pub mod placement;
pub mod session;
