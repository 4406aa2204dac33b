//! The channel-pair form: a background producer thread feeds a bounded line
//! channel, and a second channel delivers exactly one terminal value once
//! the line channel closes.

use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Read and split `reader` on a background thread, returning a line channel
/// and a terminal channel.
///
/// The line channel carries one `String` per line and closes after the last
/// one. The terminal channel then delivers exactly one value: `Ok(())` at
/// end of input, or the fault that stopped the traversal. The hand-off is a
/// rendezvous: each send completes only once the consumer takes the line, so
/// the terminal value is never observable while a line is still undrained.
///
/// Dropping the line receiver stops the producer: its next send fails, it
/// stops reading, and it still delivers a terminal value on its way out.
///
/// ```
/// let input: &[u8] = b"one\ntwo";
/// let (lines, done) = linify::channel::lines(input);
/// let got: Vec<String> = lines.into_iter().collect();
/// assert_eq!(got, ["one", "two"]);
/// assert!(done.recv().unwrap().is_ok());
/// ```
pub fn lines<R>(reader: R) -> (Receiver<String>, Receiver<io::Result<()>>)
where
    R: Read + Send + 'static,
{
    // Rendezvous hand-off: a buffered line could otherwise let the terminal
    // value arrive while the last line is still undrained.
    let (line_tx, line_rx) = mpsc::sync_channel(0);
    let (done_tx, done_rx) = mpsc::sync_channel(1);
    thread::spawn(move || {
        let mut result = Ok(());
        for line in crate::io::lines(reader) {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        // Consumer went away; stop reading.
                        break;
                    }
                }
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        // Close the line channel before the terminal value goes out, so the
        // terminal value is only observable after the last line.
        drop(line_tx);
        let _ = done_tx.send(result);
    });
    (line_rx, done_rx)
}
