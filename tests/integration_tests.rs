//! Integration tests for the word-placement server
//!
//! These tests run a real server on an ephemeral port and drive it over TCP.

use server::config::ServerConfig;
use server::dictionary::Dictionary;
use server::game::GameState;
use server::network::Server;
use shared::PROMPT;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Starts a server for a `rows`×`columns` board and returns its address.
async fn start_server(rows: usize, columns: usize, dictionary: Dictionary) -> SocketAddr {
    let config = ServerConfig::new(
        NonZeroUsize::new(rows).unwrap(),
        NonZeroUsize::new(columns).unwrap(),
    )
    .with_address("127.0.0.1", 0);
    let game = GameState::new(rows, columns, dictionary);

    let server = Server::new(&config, game).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(async move { server.run().await });
    addr
}

/// Test-side view of one session.
struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Connects and consumes the greeting prompt.
    async fn open(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        let mut connection = Connection { stream };
        assert_eq!(connection.until_prompt().await, "");
        connection
    }

    /// Reads everything up to the next prompt and returns it without the prompt.
    async fn until_prompt(&mut self) -> String {
        let mut received = Vec::new();
        let mut byte = [0u8; 1];
        while !received.ends_with(PROMPT.as_bytes()) {
            let n = self.stream.read(&mut byte).await.unwrap();
            assert_ne!(n, 0, "connection closed before prompt");
            received.push(byte[0]);
        }
        received.truncate(received.len() - PROMPT.len());
        String::from_utf8(received).unwrap()
    }

    /// Sends one command line and returns the response before the next prompt.
    async fn command(&mut self, line: &str) -> String {
        self.stream
            .write_all(format!("{}\n", line).as_bytes())
            .await
            .unwrap();
        self.until_prompt().await
    }

    async fn quit(mut self) {
        self.stream.write_all(b"quit\n").await.unwrap();
        let mut rest = Vec::new();
        self.stream.read_to_end(&mut rest).await.unwrap();
        assert!(rest.is_empty());
    }
}

const INVALID: &str = "Invalid command\n";

/// END-TO-END PROTOCOL SCENARIOS
mod scenario_tests {
    use super::*;

    #[tokio::test]
    async fn place_across_then_render() {
        let addr = start_server(3, 5, Dictionary::absent()).await;
        let mut conn = Connection::open(addr).await;

        assert_eq!(conn.command("across 0 0 cat").await, "");
        assert_eq!(
            conn.command("board").await,
            "+-----+\n|cat  |\n|     |\n|     |\n+-----+\n"
        );
        conn.quit().await;
    }

    #[tokio::test]
    async fn crossing_word_shares_letter() {
        let addr = start_server(3, 5, Dictionary::absent()).await;
        let mut conn = Connection::open(addr).await;

        assert_eq!(conn.command("across 0 0 cat").await, "");
        assert_eq!(conn.command("down 0 0 cab").await, "");
        assert_eq!(
            conn.command("board").await,
            "+-----+\n|cat  |\n|a    |\n|b    |\n+-----+\n"
        );
    }

    #[tokio::test]
    async fn collision_is_rejected() {
        let addr = start_server(3, 5, Dictionary::absent()).await;
        let mut conn = Connection::open(addr).await;

        conn.command("across 0 0 cat").await;
        let before = conn.command("board").await;

        assert_eq!(conn.command("across 0 0 dog").await, INVALID);
        assert_eq!(conn.command("board").await, before);
    }

    #[tokio::test]
    async fn word_past_last_column_is_rejected() {
        let addr = start_server(3, 5, Dictionary::absent()).await;
        let mut conn = Connection::open(addr).await;

        assert_eq!(conn.command("across 0 4 go").await, INVALID);
        assert_eq!(conn.command("down 2 0 go").await, INVALID);
        assert_eq!(
            conn.command("board").await,
            "+-----+\n|     |\n|     |\n|     |\n+-----+\n"
        );
    }

    #[tokio::test]
    async fn dictionary_limits_runs() {
        let addr = start_server(3, 5, Dictionary::from_words(["cat", "cab"])).await;
        let mut conn = Connection::open(addr).await;

        assert_eq!(conn.command("across 0 0 cat").await, "");
        let before = conn.command("board").await;

        assert_eq!(conn.command("down 0 1 ax").await, INVALID);
        assert_eq!(conn.command("down 0 1 at").await, INVALID);
        assert_eq!(conn.command("board").await, before);

        assert_eq!(conn.command("down 0 0 cab").await, "");
    }

    #[tokio::test]
    async fn dictionary_loaded_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words");
        std::fs::write(&path, "cat\ncab\n").unwrap();

        let addr = start_server(3, 5, Dictionary::load(&path).unwrap()).await;
        let mut conn = Connection::open(addr).await;

        assert_eq!(conn.command("across 0 0 dog").await, INVALID);
        assert_eq!(conn.command("across 0 0 cat").await, "");
    }

    #[tokio::test]
    async fn repeated_placement_is_idempotent() {
        let addr = start_server(3, 5, Dictionary::absent()).await;
        let mut conn = Connection::open(addr).await;

        assert_eq!(conn.command("down 0 3 sun").await, "");
        let once = conn.command("board").await;
        assert_eq!(conn.command("down 0 3 sun").await, "");
        assert_eq!(conn.command("board").await, once);
    }

    #[tokio::test]
    async fn malformed_commands_are_reported_once_each() {
        let addr = start_server(3, 5, Dictionary::absent()).await;
        let mut conn = Connection::open(addr).await;

        for line in ["hello", "across 0 zero cat", "down -1 0 a", "Board"] {
            assert_eq!(conn.command(line).await, INVALID, "{}", line);
        }

        // a command missing its arguments waits for them on the next line
        conn.stream.write_all(b"across\n").await.unwrap();
        assert_eq!(conn.command("0 0 A").await, INVALID);

        conn.quit().await;
    }

    #[tokio::test]
    async fn disconnect_without_quit_keeps_server_running() {
        let addr = start_server(3, 5, Dictionary::absent()).await;

        let mut first = Connection::open(addr).await;
        first.command("across 1 0 abc").await;
        drop(first);

        let mut second = Connection::open(addr).await;
        assert_eq!(
            second.command("board").await,
            "+-----+\n|     |\n|abc  |\n|     |\n+-----+\n"
        );
    }

    #[tokio::test]
    async fn terminal_client_round_trip() {
        let addr = start_server(3, 5, Dictionary::absent()).await;

        let client = client::network::Client::connect(&addr.to_string())
            .await
            .unwrap();
        let mut output = Vec::new();
        client
            .run(&b"across 0 0 cat\nacross 0 0 dog\nboard\nquit\n"[..], &mut output)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "cmd> cmd> Invalid command\ncmd> +-----+\n|cat  |\n|     |\n|     |\n+-----+\ncmd> "
        );
    }
}

/// CONCURRENT SESSION TESTS
mod concurrency_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn disjoint_placements_from_many_sessions() {
        let rows = 20;
        let addr = start_server(rows, 6, Dictionary::absent()).await;

        let handles: Vec<_> = (0..rows)
            .map(|row| {
                tokio::spawn(async move {
                    let mut conn = Connection::open(addr).await;
                    let letter = char::from(b'a' + (row % 26) as u8);
                    let word: String = std::iter::repeat(letter).take(6).collect();
                    let response = conn.command(&format!("across {} 0 {}", row, word)).await;
                    conn.quit().await;
                    response
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), "");
        }

        let mut conn = Connection::open(addr).await;
        let board = conn.command("board").await;
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), rows + 2);
        for row in 0..rows {
            let letter = char::from(b'a' + (row % 26) as u8);
            let expected: String = std::iter::repeat(letter).take(6).collect();
            assert_eq!(lines[row + 1], format!("|{}|", expected));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn renders_never_observe_partial_state() {
        let rows = 12;
        let addr = start_server(rows, 4, Dictionary::absent()).await;

        let writer = tokio::spawn(async move {
            let mut conn = Connection::open(addr).await;
            for row in 0..rows {
                assert_eq!(conn.command(&format!("across {} 0 word", row)).await, "");
            }
        });

        let reader = tokio::spawn(async move {
            let mut conn = Connection::open(addr).await;
            for _ in 0..50 {
                let board = conn.command("board").await;
                let body: Vec<&str> = board.lines().skip(1).take(rows).collect();
                let filled = body.iter().take_while(|line| **line == "|word|").count();
                assert!(
                    body[filled..].iter().all(|line| *line == "|    |"),
                    "torn board:\n{}",
                    board
                );
            }
        });

        writer.await.unwrap();
        reader.await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn competing_placements_on_one_cell() {
        let addr = start_server(1, 1, Dictionary::absent()).await;

        let handles: Vec<_> = (0..10u8)
            .map(|i| {
                tokio::spawn(async move {
                    let mut conn = Connection::open(addr).await;
                    let letter = char::from(b'a' + i);
                    conn.command(&format!("across 0 0 {}", letter)).await
                })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_empty() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
    }
}
