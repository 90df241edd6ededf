//! Wire protocol shared by the word-placement server and its terminal client.
//!
//! The protocol is plain text: the client sends whitespace-delimited tokens,
//! the server answers with a prompt, an error line or a rendered board.
//! Tokens are scanned with a width limit, so an over-long token is split and
//! its remainder is read as the next token.

use std::fmt;
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const PROMPT: &str = "cmd> ";
pub const INVALID_COMMAND: &str = "Invalid command";
pub const DEFAULT_PORT: u16 = 26022;
pub const DICTIONARY_FILE: &str = "words";

/// Longest word that can be placed or loaded from the dictionary.
pub const WORD_LIMIT: usize = 26;
/// Width used when scanning a word argument; one past the limit so an
/// over-long word is detected instead of silently truncated.
pub const WORD_TOKEN_LIMIT: usize = WORD_LIMIT + 1;
pub const COMMAND_LIMIT: usize = 10;
pub const NUMBER_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Across,
    Down,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Across => f.write_str("across"),
            Orientation::Down => f.write_str("down"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place {
        orientation: Orientation,
        row: usize,
        column: usize,
        word: String,
    },
    Board,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("expected a non-negative integer, got `{0}`")]
    InvalidNumber(String),
}

/// Scans whitespace-delimited tokens from a buffered async reader.
pub struct TokenReader<R> {
    inner: R,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next token, at most `max_len` bytes long.
    ///
    /// Leading whitespace is skipped. Returns `Ok(None)` if the stream ends
    /// before a token starts. Bytes past `max_len` stay in the reader.
    pub async fn next_token(&mut self, max_len: usize) -> io::Result<Option<String>> {
        loop {
            let buf = self.inner.fill_buf().await?;
            if buf.is_empty() {
                return Ok(None);
            }
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let exhausted = skip == buf.len();
            self.inner.consume(skip);
            if !exhausted {
                break;
            }
        }

        let mut token = Vec::new();
        while token.len() < max_len {
            let buf = self.inner.fill_buf().await?;
            if buf.is_empty() {
                break;
            }
            let room = max_len - token.len();
            let n = buf
                .iter()
                .take(room)
                .take_while(|b| !b.is_ascii_whitespace())
                .count();
            let hit_whitespace = n < buf.len().min(room);
            token.extend_from_slice(&buf[..n]);
            self.inner.consume(n);
            if hit_whitespace {
                break;
            }
        }

        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }

    /// Reads one complete command.
    ///
    /// The outer `Option` is `None` when the stream ends, including in the
    /// middle of a command's arguments. The inner `Result` carries commands
    /// that were read in full but could not be understood.
    pub async fn read_command(&mut self) -> io::Result<Option<Result<Command, ProtocolError>>> {
        let keyword = match self.next_token(COMMAND_LIMIT).await? {
            Some(keyword) => keyword,
            None => return Ok(None),
        };

        let orientation = match keyword.as_str() {
            "across" => Orientation::Across,
            "down" => Orientation::Down,
            "board" => return Ok(Some(Ok(Command::Board))),
            "quit" => return Ok(Some(Ok(Command::Quit))),
            _ => return Ok(Some(Err(ProtocolError::UnknownCommand(keyword)))),
        };

        let row = match self.next_number().await? {
            Some(row) => row,
            None => return Ok(None),
        };
        let column = match self.next_number().await? {
            Some(column) => column,
            None => return Ok(None),
        };
        let word = match self.next_token(WORD_TOKEN_LIMIT).await? {
            Some(word) => word,
            None => return Ok(None),
        };

        let command = match (row, column) {
            (Ok(row), Ok(column)) => Ok(Command::Place {
                orientation,
                row,
                column,
                word,
            }),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        Ok(Some(command))
    }

    async fn next_number(&mut self) -> io::Result<Option<Result<usize, ProtocolError>>> {
        Ok(self.next_token(NUMBER_LIMIT).await?.map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ProtocolError::InvalidNumber(token))
        }))
    }
}
