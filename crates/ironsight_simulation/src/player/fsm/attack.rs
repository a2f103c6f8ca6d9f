//! Attack — стрельба с каденцией rounds_per_second
//!
//! Цикл: один выстрел в начале удержания, далее по одному на период
//! 1/rps, НЕ каждый кадр. Пустой магазин уводит в Reload, пустой резерв —
//! в Movement.

use super::{StateContext, StateRequest};
use crate::components::FireMode;

#[derive(Debug)]
pub struct AttackState {
    mode: FireMode,
    /// Аккумулятор времени с последнего выстрела; ровно 0.0 = «пора стрелять»
    elapsed: f32,
}

impl AttackState {
    pub fn new() -> Self {
        Self {
            mode: FireMode::FullAuto,
            elapsed: 0.0,
        }
    }

    /// Выбранный режим (конфигурируется запрашивающим состоянием
    /// через PlayerFsm::apply перед переходом)
    pub fn mode(&self) -> FireMode {
        self.mode
    }

    pub(super) fn set_mode(&mut self, mode: FireMode) {
        self.mode = mode;
    }

    pub(super) fn enter(&mut self, ctx: &mut StateContext) {
        ctx.animation.set_flag(self.mode.flag_name(), true);
        self.elapsed = 0.0;
    }

    pub(super) fn exit(&mut self, ctx: &mut StateContext) {
        ctx.animation.set_flag(self.mode.flag_name(), false);
    }

    pub(super) fn update(&mut self, ctx: &mut StateContext) -> Option<StateRequest> {
        // 1. Магазин пуст, резерв есть → auto-reload
        if ctx.firearm.magazine_empty() && !ctx.firearm.reserve_empty() {
            return Some(StateRequest::Reload);
        }

        // 2. Резерв пуст → патроны кончились, стрельба невозможна
        if ctx.firearm.reserve_empty() {
            return Some(StateRequest::Movement);
        }

        // 3. Триггер выбранного режима зажат → каденция
        if ctx.input.fire_held(self.mode) {
            ctx.animation.set_flag(self.mode.flag_name(), true);
            if self.elapsed == 0.0 {
                // Первый кадр удержания или сразу после wrap
                ctx.firearm.fire();
            }
            self.elapsed += ctx.delta;
            if self.elapsed > ctx.firearm.cadence_period() {
                self.elapsed = 0.0; // Следующий зажатый кадр стреляет снова
            }
            None
        } else {
            // 4. Триггер отпущен
            self.elapsed = 0.0;
            ctx.animation.set_flag(self.mode.flag_name(), false);
            Some(StateRequest::Movement)
        }
    }
}
