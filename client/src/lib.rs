//! # Word-Placement Game Client Library
//!
//! A terminal client for the word-placement server. The protocol is plain
//! text, so the client does no parsing of its own: it forwards each line the
//! user types and prints whatever the server answers, including the
//! `cmd> ` prompt.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use client::network::Client;
//! use tokio::io::{stdin, stdout, BufReader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::connect("127.0.0.1:26022").await?;
//!     client.run(BufReader::new(stdin()), stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod network;
