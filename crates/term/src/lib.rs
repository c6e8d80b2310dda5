//! Terminal module - the operator's side of the server.
//!
//! The operator console is just another [`Transport`](adapter::Transport):
//! the dispatcher prompts it, reads one line from it when the local player is
//! on turn, and shows it every board update. Unlike the wire, the console
//! renders `X`/`O` in colour.
//!
//! Setup menus (board size, game mode) also live here since they only ever run
//! on the operator's terminal before any participant connects.

pub mod console;
pub mod renderer;
pub mod setup;

pub use connect_four_adapter as adapter;
pub use connect_four_core as core;
pub use connect_four_types as types;

pub use console::Console;
pub use renderer::{encode_board_into, BoardStyle};
pub use setup::{parse_choice, select_board_size, select_mode, warn_if_wide};
