//! Movement — hub state графа переходов
//!
//! Все остальные состояния возвращаются сюда по своему терминальному
//! условию (кроме Attack → Reload при пустом магазине).

use super::{StateContext, StateRequest};
use crate::components::{FireMode, LocomotionCommand};

/// Локомоция + выбор fire/reload/crouch триггеров
#[derive(Debug, Default)]
pub struct MovementState;

impl MovementState {
    pub fn new() -> Self {
        Self
    }

    pub(super) fn update(&mut self, ctx: &mut StateContext) -> Option<StateRequest> {
        // Move(): локомоция выполняется безусловно каждый кадр
        *ctx.locomotion = LocomotionCommand::Drive;

        // Проверки независимы, каждая перезаписывает запрос.
        // Tie-break при нескольких триггерах в одном кадре: последняя
        // побеждает — crouch > reload > fire-3 > fire-2 > fire-1.
        let mut request = None;

        if ctx.input.fire_primary {
            request = Some(StateRequest::Attack(FireMode::FullAuto));
        }
        if ctx.input.fire_secondary {
            request = Some(StateRequest::Attack(FireMode::Burst));
        }
        if ctx.input.fire_tertiary {
            request = Some(StateRequest::Attack(FireMode::Single));
        }
        if ctx.input.reload {
            request = Some(StateRequest::Reload);
        }
        if ctx.input.crouch {
            request = Some(StateRequest::Crouch);
        }

        request
    }
}
