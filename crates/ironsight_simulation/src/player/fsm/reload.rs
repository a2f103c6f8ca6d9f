//! Reload — одноразовый таймер без досрочного выхода
//!
//! Перераспределение патронов происходит в Exit (срабатывает при любом
//! уходе из Reload, включая таймаут).

use super::{StateContext, StateRequest};

/// Длительность перезарядки (секунды)
pub const RELOAD_TIME: f32 = 3.0;

#[derive(Debug)]
pub struct ReloadState {
    elapsed: f32,
    reload_time: f32,
}

impl ReloadState {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            reload_time: RELOAD_TIME,
        }
    }

    pub(super) fn enter(&mut self, ctx: &mut StateContext) {
        ctx.animation.trigger("Reload");
        self.elapsed = 0.0;
    }

    pub(super) fn exit(&mut self, ctx: &mut StateContext) {
        ctx.firearm.refill_from_reserve();
    }

    pub(super) fn update(&mut self, ctx: &mut StateContext) -> Option<StateRequest> {
        self.elapsed += ctx.delta;
        if self.elapsed >= self.reload_time {
            Some(StateRequest::Movement)
        } else {
            None
        }
    }
}
