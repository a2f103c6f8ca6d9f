//! Базовые компоненты актора: Player, Health

use bevy::prelude::*;

/// Маркер игрока — единственный управляемый актор симуляции
///
/// Автоматически добавляет весь player kit через Required Components:
/// Health, Firearm, PlayerInput, LocomotionCommand и PlayerFsm.
/// `commands.spawn(Player)` даёт полностью рабочего актора.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(
    Health,
    crate::components::Firearm,
    crate::components::PlayerInput,
    crate::components::LocomotionCommand,
    crate::player::PlayerFsm
)]
pub struct Player;

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max
///
/// Пока нет системы урона, которая переводила бы FSM в TakeDamage/Dead —
/// компонент является контекстом для неё (известный gap графа переходов).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.max);
    }
}
