use log::{debug, info};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

pub struct Client {
    stream: TcpStream,
}

impl Client {
    pub async fn connect(server_addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let stream = TcpStream::connect(server_addr).await?;
        info!("Connected to {}", stream.peer_addr()?);
        Ok(Client { stream })
    }

    /// Relays lines from `input` to the server and everything the server
    /// sends to `output`.
    ///
    /// Returns once the server closes the connection. Input ends after a
    /// `quit` line or end of input; the write side is then shut down so the
    /// server sees the end of the stream.
    pub async fn run<I, O>(self, input: I, mut output: O) -> io::Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let (mut server_rx, mut server_tx) = self.stream.into_split();

        let forward_output = async move {
            let mut buffer = [0u8; 2048];
            loop {
                let n = server_rx.read(&mut buffer).await?;
                if n == 0 {
                    info!("Server closed the connection");
                    return Ok::<(), io::Error>(());
                }
                output.write_all(&buffer[..n]).await?;
                output.flush().await?;
            }
        };

        let forward_input = async move {
            let mut lines = input.lines();
            while let Some(line) = lines.next_line().await? {
                server_tx.write_all(line.as_bytes()).await?;
                server_tx.write_all(b"\n").await?;
                if line.split_whitespace().next() == Some("quit") {
                    break;
                }
            }
            debug!("Input finished, closing write side");
            server_tx.shutdown().await
        };

        tokio::pin!(forward_output);
        tokio::pin!(forward_input);
        let mut input_done = false;

        loop {
            tokio::select! {
                result = &mut forward_output => return result,
                result = &mut forward_input, if !input_done => {
                    result?;
                    input_done = true;
                }
            }
        }
    }
}
