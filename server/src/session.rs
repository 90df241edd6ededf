//! Per-connection command loop.
//!
//! A session writes the prompt, reads one command, answers it and prompts
//! again until the client sends `quit` or the stream ends. Commands are read
//! before the board lock is taken and the response is written after it is
//! released, so an idle or slow client never holds shared state.

use crate::game::GameState;
use crate::placement::Placement;
use log::debug;
use shared::{Command, TokenReader, INVALID_COMMAND, PROMPT};
use std::io;
use tokio::io::{
    split, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf,
};

pub struct Session<S> {
    commands: TokenReader<BufReader<ReadHalf<S>>>,
    writer: WriteHalf<S>,
    game: GameState,
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite,
{
    pub fn new(stream: S, game: GameState) -> Self {
        let (reader, writer) = split(stream);
        Self {
            commands: TokenReader::new(BufReader::new(reader)),
            writer,
            game,
        }
    }

    /// Runs the command loop to completion and closes the write side.
    pub async fn run(mut self) -> io::Result<()> {
        self.send(PROMPT.to_string()).await?;

        while let Some(command) = self.commands.read_command().await? {
            let mut response = match command {
                Ok(command) => match self.respond(command).await {
                    Some(response) => response,
                    None => break,
                },
                Err(e) => {
                    debug!("Malformed command: {}", e);
                    invalid_command()
                }
            };
            response.push_str(PROMPT);
            self.send(response).await?;
        }

        self.writer.shutdown().await
    }

    /// Executes one command. Returns `None` for `quit`.
    async fn respond(&self, command: Command) -> Option<String> {
        let response = match command {
            Command::Place {
                orientation,
                row,
                column,
                word,
            } => {
                let placement = Placement::new(orientation, row, column, word);
                match self.game.place(&placement).await {
                    Ok(()) => String::new(),
                    Err(_) => invalid_command(),
                }
            }
            Command::Board => self.game.render().await,
            Command::Quit => return None,
        };
        Some(response)
    }

    async fn send(&mut self, response: String) -> io::Result<()> {
        self.writer.write_all(response.as_bytes()).await?;
        self.writer.flush().await
    }
}

fn invalid_command() -> String {
    format!("{}\n", INVALID_COMMAND)
}
