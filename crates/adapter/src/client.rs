//! Remote participant passthrough.
//!
//! The client has no game logic: it echoes every non-empty server line to the
//! local terminal and, whenever a line is a turn prompt, forwards one line of
//! local input back to the server.

use tracing::debug;

use crate::protocol::is_turn_prompt;
use crate::transport::{Transport, TransportError};

/// Printed locally when the server hangs up
pub const CONNECTION_CLOSED: &str = "Connection closed by server.\n";

/// Relay between the server connection and the local terminal until the
/// server closes the connection.
///
/// A clean server close returns `Ok`. Local input ending while a prompt is
/// pending returns [`TransportError::Closed`].
pub async fn relay(
    server: &mut dyn Transport,
    local: &mut dyn Transport,
) -> Result<(), TransportError> {
    loop {
        let line = match server.read_line().await {
            Ok(line) => line,
            Err(TransportError::Closed) => {
                local.send(CONNECTION_CLOSED).await?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        local.send(message).await?;
        local.send("\n").await?;

        if is_turn_prompt(message) {
            let input = local.read_line().await?;
            debug!(input = %input.trim(), "forwarding move");
            server.send(&format!("{}\n", input.trim())).await?;
        }
    }
}
