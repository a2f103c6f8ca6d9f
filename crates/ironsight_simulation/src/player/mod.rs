//! Player decision-making module (combat FSM + driver systems)
//!
//! Архитектура: docs/architecture/player-fsm.md

use bevy::prelude::*;

pub mod fsm;
pub mod systems;

// Re-export основных типов
pub use fsm::{FsmError, PlayerFsm, PlayerState, StateContext, StateId, StateRequest};

/// Player Plugin
///
/// Порядок выполнения в Update (chain для детерминизма):
/// 1. boot_player_fsm — explicit initial state новым игрокам
/// 2. drive_player_fsm — update текущего состояния + переходы
/// 3. clear_input_edges — сброс pressed-сигналов
///
/// FixedUpdate: drive_player_fsm_fixed (60Hz forward).
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<crate::animation::AnimationCommandEvent>();

        app.add_systems(
            Update,
            (
                systems::boot_player_fsm,
                systems::drive_player_fsm,
                systems::clear_input_edges,
            )
                .chain(),
        );

        app.add_systems(FixedUpdate, systems::drive_player_fsm_fixed);
    }
}
