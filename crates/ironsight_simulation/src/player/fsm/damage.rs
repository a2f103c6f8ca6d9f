//! TakeDamage / Dead — заглушки без входящих переходов
//!
//! В графе нет ни одного SetCurrentState в эти состояния: система урона,
//! которая будет их включать, живёт выше этого ядра. Зарегистрированы
//! заранее, чтобы registry был полным к моменту её появления.

use super::StateContext;

#[derive(Debug, Default)]
pub struct TakeDamageState;

impl TakeDamageState {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Default)]
pub struct DeadState;

impl DeadState {
    pub fn new() -> Self {
        Self
    }

    pub(super) fn enter(&mut self, ctx: &mut StateContext) {
        ctx.animation.trigger("Die");
    }
}
