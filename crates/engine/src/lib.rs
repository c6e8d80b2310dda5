//! Engine module - turn dispatch for one game session
//!
//! The engine owns the game authority for a session: it decides whose move is
//! read next, validates it against the board and fans the result out to every
//! seat. It never touches sockets or the terminal directly; all I/O goes
//! through [`adapter::Transport`] objects handed in by the binaries.
//!
//! - [`source`]: seat routing per mode and the scripted computer opponent
//! - [`broadcast`]: best-effort writes to every seat
//! - [`dispatcher`]: the `AwaitingMove -> Applying -> Finished` state machine

pub mod broadcast;
pub mod dispatcher;
pub mod source;

pub use connect_four_adapter as adapter;
pub use connect_four_core as core;
pub use connect_four_types as types;

pub use broadcast::Broadcaster;
pub use dispatcher::{AbortReason, Outcome, TurnDispatcher, TurnState};
pub use source::{notification_targets, ComputerOpponent};
