//! Crouch — удержание приседа

use super::{StateContext, StateRequest};

#[derive(Debug, Default)]
pub struct CrouchState;

impl CrouchState {
    pub fn new() -> Self {
        Self
    }

    pub(super) fn enter(&mut self, ctx: &mut StateContext) {
        ctx.animation.set_flag("Crouch", true);
    }

    pub(super) fn exit(&mut self, ctx: &mut StateContext) {
        ctx.animation.set_flag("Crouch", false);
    }

    pub(super) fn update(&mut self, ctx: &mut StateContext) -> Option<StateRequest> {
        if ctx.input.crouch {
            // Сидим пока зажато
            None
        } else {
            Some(StateRequest::Movement)
        }
    }
}
