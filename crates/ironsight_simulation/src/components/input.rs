//! Input snapshot компонент (host shell → ECS)
//!
//! Архитектура:
//! - Host shell поллит устройства и пишет PlayerInput каждый кадр
//! - ECS системы ТОЛЬКО читают (кроме clear_input_edges)
//! - held-сигналы живут пока зажата кнопка, pressed-сигналы — один кадр

use bevy::prelude::*;

use super::firearm::FireMode;

/// Снимок триггеров игрока на текущий кадр
///
/// held: fire_primary/fire_secondary/fire_tertiary/crouch
/// edge (один кадр): reload — сбрасывается clear_input_edges после FSM
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// Fire 1 (Full Auto) зажат
    pub fire_primary: bool,
    /// Fire 2 (Burst) зажат
    pub fire_secondary: bool,
    /// Fire 3 (Single Shot) зажат
    pub fire_tertiary: bool,
    /// Crouch зажат
    pub crouch: bool,
    /// Reload нажат (edge, не удержание)
    pub reload: bool,
}

impl PlayerInput {
    /// Зажат ли триггер, соответствующий выбранному режиму стрельбы
    pub fn fire_held(&self, mode: FireMode) -> bool {
        match mode {
            FireMode::FullAuto => self.fire_primary,
            FireMode::Burst => self.fire_secondary,
            FireMode::Single => self.fire_tertiary,
        }
    }

    /// Сброс одноразовых (pressed) сигналов в конце кадра
    pub fn clear_edges(&mut self) {
        self.reload = false;
    }
}
