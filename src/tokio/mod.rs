//! Async counterparts of the iterator and channel-pair forms, over any
//! [`tokio::io::AsyncRead`].

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::{mpsc, oneshot};

/// Async line iterator, created by [`lines`].
///
/// Same contract as the sync [`Lines`](crate::Lines): end of input yields
/// `Ok(None)`, a fault yields one `Err` and fuses the iterator.
pub struct Lines<R> {
    inner: tokio::io::Lines<BufReader<R>>,
    done: bool,
}

impl<R: AsyncRead + Unpin> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader).lines(),
            done: false,
        }
    }

    /// Next line, `Ok(None)` at end of input.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        match self.inner.next_line().await {
            Ok(Some(line)) => Ok(Some(line)),
            Ok(None) => {
                self.done = true;
                Ok(None)
            }
            Err(err) => {
                self.done = true;
                Err(err)
            }
        }
    }
}

/// Iterate over the lines of an async reader.
///
/// ```no_run
/// # async fn example(reader: impl tokio::io::AsyncRead + Unpin) -> std::io::Result<()> {
/// let mut lines = linify::tokio::lines(reader);
/// while let Some(line) = lines.next_line().await? {
///     println!("{line}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn lines<R: AsyncRead + Unpin>(reader: R) -> Lines<R> {
    Lines::new(reader)
}

/// The channel-pair form on a spawned task.
///
/// Same contract as [`channel::lines`](crate::channel::lines): the line
/// channel closes after the last line, then the oneshot delivers exactly one
/// terminal value. The line channel holds at most one line, and the producer
/// waits for it to be drained before the terminal value goes out, so the
/// terminal is never observable while a line is still undrained.
///
/// Must be called within a tokio runtime.
pub fn channel<R>(reader: R) -> (mpsc::Receiver<String>, oneshot::Receiver<io::Result<()>>)
where
    R: AsyncRead + Send + Unpin + 'static,
{
    let (line_tx, line_rx) = mpsc::channel(1);
    let (done_tx, done_rx) = oneshot::channel();
    tokio::spawn(async move {
        let mut lines = lines(reader);
        let result = loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line_tx.send(line).await.is_err() {
                        // Consumer went away; stop reading.
                        break Ok(());
                    }
                }
                Ok(None) => break Ok(()),
                Err(err) => break Err(err),
            }
        };
        // The channel has capacity one, so acquiring a permit means the last
        // buffered line has been drained (or the consumer went away).
        let _ = line_tx.reserve().await;
        drop(line_tx);
        let _ = done_tx.send(result);
    });
    (line_rx, done_rx)
}
