//! Animation intents (ECS → host AnimationTree)
//!
//! Architecture:
//! - FSM states пишут команды в AnimationChannel (буфер одного кадра)
//! - Driver system сливает буфер в AnimationCommandEvent
//! - Host shell читает события и дёргает AnimationTree (fire-and-forget)
//!
//! ECS не ждёт подтверждения: анимация — presentation, не game state.

use bevy::prelude::*;

/// Одна команда анимационной системе хоста
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationCommand {
    /// SetBool(name, value) в AnimationTree ("Crouch", "Attack1"…)
    SetFlag { name: &'static str, value: bool },
    /// One-shot trigger ("Reload", "Die")
    Trigger { name: &'static str },
}

/// Event: команда анимации для конкретного актора (ECS → host)
#[derive(Event, Debug, Clone)]
pub struct AnimationCommandEvent {
    pub entity: Entity,
    pub command: AnimationCommand,
}

/// Покадровый буфер анимационных команд
///
/// Передаётся в FSM hooks через StateContext, сливается driver-системой.
/// Не компонент: живёт один вызов update, порядок команд сохраняется.
#[derive(Debug, Default)]
pub struct AnimationChannel {
    commands: Vec<AnimationCommand>,
}

impl AnimationChannel {
    pub fn set_flag(&mut self, name: &'static str, value: bool) {
        self.commands.push(AnimationCommand::SetFlag { name, value });
    }

    pub fn trigger(&mut self, name: &'static str) {
        self.commands.push(AnimationCommand::Trigger { name });
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Накопленные команды (для ассертов в тестах)
    pub fn commands(&self) -> &[AnimationCommand] {
        &self.commands
    }

    pub fn drain(&mut self) -> impl Iterator<Item = AnimationCommand> + '_ {
        self.commands.drain(..)
    }
}
