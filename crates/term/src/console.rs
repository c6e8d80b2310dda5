//! Operator console transport over stdin/stdout.

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite, Stdin, Stdout};

use crate::adapter::{LineTransport, Transport, TransportError};
use crate::core::Board;
use crate::renderer::{encode_board_into, BoardStyle};

/// The local operator's channel.
///
/// Text goes out unchanged; boards are re-encoded with [`BoardStyle`].
pub struct Console<R, W> {
    inner: LineTransport<R, W>,
    style: BoardStyle,
    buf: Vec<u8>,
}

impl Console<Stdin, Stdout> {
    /// Console bound to the process's standard streams
    pub fn stdio(style: BoardStyle) -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout(), style)
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W, style: BoardStyle) -> Self {
        Self {
            inner: LineTransport::new(reader, writer, "console"),
            style,
            buf: Vec::with_capacity(4 * 1024),
        }
    }
}

#[async_trait]
impl<R, W> Transport for Console<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<String, TransportError> {
        self.inner.read_line().await
    }

    async fn send(&mut self, text: &str) -> Result<(), TransportError> {
        self.inner.send(text).await
    }

    async fn send_board(&mut self, board: &Board) -> Result<(), TransportError> {
        self.buf.clear();
        encode_board_into(board, self.style, &mut self.buf)?;
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        self.inner.send(&text).await
    }

    /// Stdout stays open for the binary's own output after the game.
    async fn close(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn label(&self) -> &str {
        self.inner.label()
    }
}
