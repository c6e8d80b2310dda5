//! Adapter module - participant channels over TCP with a text line protocol
//!
//! This module connects remote participants to the game authority. Each
//! participant holds one TCP connection; the server writes text lines and
//! reads a single line whenever that participant is on turn.
//!
//! # Protocol Overview
//!
//! 1. **Connection**: participants connect to the server socket (default port 8000)
//! 2. **Seating**: connections are seated in accept order according to the mode
//! 3. **Broadcast**: after every accepted move all participants receive the board
//! 4. **Prompting**: the participant on turn receives a prompt containing `Enter column`
//! 5. **Answer**: the participant replies with one line holding a column number
//!
//! # Example Session
//!
//! ```text
//! Server -> Client: "Your turn (Player 1). Enter column (1-7): "
//! Client -> Server: "4"
//! Server -> Client: "\n. . . . . . . \n ... \n. . . X . . . \n1 2 3 4 5 6 7 \n\n"
//! Server -> Client: "Player 2 is making a move..."
//! ```
//!
//! # Environment Variables
//!
//! - `CONNECT_FOUR_HOST`: bind address for the server, host to dial for the client
//! - `CONNECT_FOUR_PORT`: port number (default: 8000)
//!
//! # Implementation
//!
//! - Uses **tokio** for async networking
//! - [`transport::Transport`] is the seam between the dispatcher and any channel
//! - See [`protocol`] for the message texts
//! - See [`server`] for binding and participant acceptance
//! - See [`client`] for the remote terminal passthrough

pub mod client;
pub mod protocol;
pub mod server;
pub mod transport;

pub use connect_four_core as core;
pub use connect_four_types as types;

pub use client::relay;
pub use server::{accept_participants, bind, check_tcp_listen_available, ServerConfig};
pub use transport::{LineTransport, Transport, TransportError};
