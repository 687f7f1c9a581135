// colorsh/src/stream.rs
//! Streaming stdin reader for line mode.
//!
//! A blocking producer task reads raw lines from standard input into a
//! bounded channel while the main task drains it, so reading and coloring
//! proceed concurrently. Dropping the sender on EOF closes the channel,
//! which is the consumer's termination signal.

use std::io::BufRead;

use log::warn;
use tokio::sync::mpsc::{self, Receiver};

/// Bound on in-flight lines between the reader and the colorizer.
pub const CHANNEL_CAPACITY: usize = 256;

/// Spawns the stdin producer and returns the receiving end.
///
/// Lines are delivered as raw bytes with the trailing line break removed;
/// encoding validation stays with the engine so the force override applies
/// uniformly.
pub fn spawn_stdin_reader() -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel::<Vec<u8>>(CHANNEL_CAPACITY);

    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        loop {
            let mut line = Vec::new();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if line.ends_with(b"\n") {
                        line.pop();
                        if line.ends_with(b"\r") {
                            line.pop();
                        }
                    }
                    if tx.blocking_send(line).is_err() {
                        // Consumer went away; stop reading.
                        break;
                    }
                }
                Err(e) => {
                    warn!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
        // tx dropped here: channel closes, consumer sees EOF.
    });

    rx
}
