//! Line-oriented participant channels.
//!
//! A [`Transport`] is the only way the turn dispatcher talks to a participant:
//! it writes prompts, notices, and board renders, and reads exactly one line
//! when that participant is on turn. The local operator console implements the
//! same trait, so every move source is read the same way.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use connect_four_core::Board;

/// Errors on a participant channel. Both variants end the session.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection closed by peer")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Bidirectional line channel to one participant
#[async_trait]
pub trait Transport: Send {
    /// Wait for the next full line, terminator stripped.
    ///
    /// Returns [`TransportError::Closed`] at end of stream. Bytes that are not
    /// valid UTF-8 are not an error; they come back as replacement characters
    /// and fail column parsing like any other bad input.
    async fn read_line(&mut self) -> Result<String, TransportError>;

    /// Write `text` verbatim and flush. Messages carry their own newlines.
    async fn send(&mut self, text: &str) -> Result<(), TransportError>;

    /// Send the board state. The default writes the plain text render.
    async fn send_board(&mut self, board: &Board) -> Result<(), TransportError> {
        self.send(&board.render()).await
    }

    /// Shut down the write side. The default does nothing.
    async fn close(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Short label for diagnostics, e.g. the peer address
    fn label(&self) -> &str;
}

/// [`Transport`] over any tokio byte stream pair
pub struct LineTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
    label: String,
    line: Vec<u8>,
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W, label: impl Into<String>) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            label: label.into(),
            line: Vec::new(),
        }
    }
}

impl LineTransport<OwnedReadHalf, OwnedWriteHalf> {
    /// Wrap an accepted or connected TCP stream, labelled with the peer address
    pub fn from_tcp(stream: TcpStream) -> io::Result<Self> {
        let peer = stream.peer_addr()?;
        let (reader, writer) = stream.into_split();
        Ok(Self::new(reader, writer, peer.to_string()))
    }
}

#[async_trait]
impl<R, W> Transport for LineTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<String, TransportError> {
        self.line.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.line).await?;
        if bytes_read == 0 {
            return Err(TransportError::Closed);
        }
        Ok(String::from_utf8_lossy(&self.line)
            .trim_end_matches(|c| c == '\n' || c == '\r')
            .to_string())
    }

    async fn send(&mut self, text: &str) -> Result<(), TransportError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.writer.shutdown().await?;
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}
