//! Locomotion команда (ECS → host CharacterBody)

use bevy::prelude::*;

/// Команда локомоции для host shell
///
/// Архитектура:
/// - Movement state пишет Drive каждый кадр, пока активен (аналог Move())
/// - Host shell читает и применяет физику перемещения
/// - Механика самого движения вне ECS (tactical layer)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionCommand {
    /// Стоять (Crouch/Attack/Reload не двигают актора)
    Idle,
    /// Выполнять локомоцию от текущего input направления
    Drive,
}

impl Default for LocomotionCommand {
    fn default() -> Self {
        Self::Idle
    }
}
