//! Player systems (FSM driver, input edges).

pub mod fsm;

pub use fsm::{boot_player_fsm, clear_input_edges, drive_player_fsm, drive_player_fsm_fixed};
