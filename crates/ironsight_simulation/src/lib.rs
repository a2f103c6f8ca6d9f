//! IRONSIGHT Simulation Core
//!
//! ECS-симуляция боевого поведения игрока на Bevy 0.16 (strategic layer).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (FSM, ammo model, cadence/reload timing)
//! - Host shell = tactical layer (input polling, animation playback,
//!   физика локомоции) — общается через PlayerInput / LocomotionCommand /
//!   AnimationCommandEvent

use bevy::prelude::*;

// Публичные модули
pub mod animation;
pub mod components;
pub mod logger;
pub mod player;

// Re-export базовых типов для удобства
pub use animation::{AnimationChannel, AnimationCommand, AnimationCommandEvent};
pub use components::*;
pub use player::{FsmError, PlayerFsm, PlayerPlugin, PlayerState, StateContext, StateId, StateRequest};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Подсистемы (ECS strategic layer)
            .add_plugins(PlayerPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}
