//! ECS компоненты игрока (strategic layer)

pub mod actor;
pub mod firearm;
pub mod input;
pub mod movement;

// Re-export основных типов
pub use actor::{Health, Player};
pub use firearm::{FireMode, Firearm};
pub use input::PlayerInput;
pub use movement::LocomotionCommand;
