//! Player combat FSM (registry + lifecycle dispatch)
//!
//! Конечный автомат боевого поведения игрока:
//! Movement ⇄ Crouch / Attack / Reload, Attack → Reload при пустом магазине.
//! TakeDamage и Dead зарегистрированы, но недостижимы — входящих переходов
//! нет до появления системы урона (известный gap, не чинить здесь).
//!
//! Архитектура:
//! - Закрытый sum type PlayerState вместо виртуального базового класса
//! - update возвращает Option<StateRequest> — канал запроса перехода,
//!   state не держит ссылку на владеющий его автомат
//! - Общий контекст актора передаётся в hooks явным StateContext borrow
//! - Registry — фиксированный массив по StateId, ошибки конфигурации
//!   (дубликат / незарегистрированный id) — явные Err, не panic

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod attack;
pub mod crouch;
pub mod damage;
pub mod movement;
pub mod reload;

#[cfg(test)]
mod fsm_tests;

pub use attack::AttackState;
pub use crouch::CrouchState;
pub use damage::{DeadState, TakeDamageState};
pub use movement::MovementState;
pub use reload::{ReloadState, RELOAD_TIME};

use crate::animation::AnimationChannel;
use crate::components::{FireMode, Firearm, LocomotionCommand, PlayerInput};

/// Идентификатор состояния — ключ registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateId {
    Movement,
    Crouch,
    Attack,
    Reload,
    TakeDamage,
    Dead,
}

impl StateId {
    pub const COUNT: usize = 6;

    fn index(self) -> usize {
        self as usize
    }
}

/// Ошибки конфигурации автомата — hard failure на setup, не retry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("state {0:?} is already registered")]
    AlreadyRegistered(StateId),
    #[error("state {0:?} was never registered")]
    NotRegistered(StateId),
}

/// Запрос перехода, возвращаемый из update
///
/// Attack несёт выбранный режим стрельбы: автомат настраивает Attack state
/// и rounds_per_second непосредственно перед срабатыванием перехода.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRequest {
    Movement,
    Crouch,
    Attack(FireMode),
    Reload,
    TakeDamage,
    Dead,
}

impl StateRequest {
    pub fn id(self) -> StateId {
        match self {
            StateRequest::Movement => StateId::Movement,
            StateRequest::Crouch => StateId::Crouch,
            StateRequest::Attack(_) => StateId::Attack,
            StateRequest::Reload => StateId::Reload,
            StateRequest::TakeDamage => StateId::TakeDamage,
            StateRequest::Dead => StateId::Dead,
        }
    }
}

/// Контекст актора, передаваемый в каждый lifecycle hook
///
/// Явный borrow вместо хранимых ссылок: зависимости состояний видны в
/// сигнатуре, variants тестируются без полного автомата и без App.
pub struct StateContext<'a> {
    pub firearm: &'a mut Firearm,
    pub input: &'a PlayerInput,
    pub animation: &'a mut AnimationChannel,
    pub locomotion: &'a mut LocomotionCommand,
    /// Время кадра (секунды, ≥ 0) от host clock
    pub delta: f32,
}

/// Закрытый sum type над шестью вариантами состояний
///
/// Слот registry с индексом StateId::X всегда держит вариант X —
/// гарантируется register() (id берётся из самого варианта).
#[derive(Debug)]
pub enum PlayerState {
    Movement(MovementState),
    Crouch(CrouchState),
    Attack(AttackState),
    Reload(ReloadState),
    TakeDamage(TakeDamageState),
    Dead(DeadState),
}

impl PlayerState {
    pub fn id(&self) -> StateId {
        match self {
            PlayerState::Movement(_) => StateId::Movement,
            PlayerState::Crouch(_) => StateId::Crouch,
            PlayerState::Attack(_) => StateId::Attack,
            PlayerState::Reload(_) => StateId::Reload,
            PlayerState::TakeDamage(_) => StateId::TakeDamage,
            PlayerState::Dead(_) => StateId::Dead,
        }
    }

    fn enter(&mut self, ctx: &mut StateContext) {
        match self {
            PlayerState::Crouch(state) => state.enter(ctx),
            PlayerState::Attack(state) => state.enter(ctx),
            PlayerState::Reload(state) => state.enter(ctx),
            PlayerState::Dead(state) => state.enter(ctx),
            // Movement/TakeDamage: pass-through
            PlayerState::Movement(_) | PlayerState::TakeDamage(_) => {}
        }
    }

    fn exit(&mut self, ctx: &mut StateContext) {
        match self {
            PlayerState::Crouch(state) => state.exit(ctx),
            PlayerState::Attack(state) => state.exit(ctx),
            PlayerState::Reload(state) => state.exit(ctx),
            PlayerState::Movement(_) | PlayerState::TakeDamage(_) | PlayerState::Dead(_) => {}
        }
    }

    fn update(&mut self, ctx: &mut StateContext) -> Option<StateRequest> {
        match self {
            PlayerState::Movement(state) => state.update(ctx),
            PlayerState::Crouch(state) => state.update(ctx),
            PlayerState::Attack(state) => state.update(ctx),
            PlayerState::Reload(state) => state.update(ctx),
            // Stubs: переходов наружу нет
            PlayerState::TakeDamage(_) | PlayerState::Dead(_) => None,
        }
    }

    fn fixed_update(&mut self, _ctx: &mut StateContext) {
        // Все варианты пока pass-through (зарезервировано под физику)
    }
}

/// Registry + current state
///
/// Владеет всеми State instances на весь lifetime актора; current —
/// невладеющий id одного из слотов. Ровно одно состояние активно после
/// явного начального set_current (неявного default нет).
#[derive(Component, Debug)]
pub struct PlayerFsm {
    states: [Option<PlayerState>; StateId::COUNT],
    current: Option<StateId>,
}

impl Default for PlayerFsm {
    fn default() -> Self {
        Self::player()
    }
}

impl PlayerFsm {
    /// Пустой автомат (registry заполняется register())
    pub fn new() -> Self {
        Self {
            states: [None, None, None, None, None, None],
            current: None,
        }
    }

    /// Полный player-автомат: все шесть состояний зарегистрированы,
    /// current не установлен (host обязан выставить initial state)
    pub fn player() -> Self {
        let mut fsm = Self::new();
        // Шесть разных вариантов — register не может вернуть Err
        let _ = fsm.register(PlayerState::Movement(MovementState::new()));
        let _ = fsm.register(PlayerState::Crouch(CrouchState::new()));
        let _ = fsm.register(PlayerState::Attack(AttackState::new()));
        let _ = fsm.register(PlayerState::Reload(ReloadState::new()));
        let _ = fsm.register(PlayerState::TakeDamage(TakeDamageState::new()));
        let _ = fsm.register(PlayerState::Dead(DeadState::new()));
        fsm
    }

    /// Регистрация состояния под его собственным id
    ///
    /// Вызывается один раз на id во время actor setup.
    pub fn register(&mut self, state: PlayerState) -> Result<(), FsmError> {
        let id = state.id();
        let slot = &mut self.states[id.index()];
        if slot.is_some() {
            return Err(FsmError::AlreadyRegistered(id));
        }
        *slot = Some(state);
        Ok(())
    }

    pub fn state(&self, id: StateId) -> Result<&PlayerState, FsmError> {
        self.states[id.index()]
            .as_ref()
            .ok_or(FsmError::NotRegistered(id))
    }

    pub fn state_mut(&mut self, id: StateId) -> Result<&mut PlayerState, FsmError> {
        self.states[id.index()]
            .as_mut()
            .ok_or(FsmError::NotRegistered(id))
    }

    /// Id текущего состояния (None до initial set_current)
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Переход в состояние id
    ///
    /// Повторный вход в текущее состояние — no-op (Enter/Exit НЕ
    /// перезапускаются, иначе анимации сбрасываются каждый кадр).
    /// Иначе: Exit текущего → смена current → Enter нового.
    pub fn set_current(&mut self, id: StateId, ctx: &mut StateContext) -> Result<(), FsmError> {
        if self.current == Some(id) {
            return Ok(());
        }
        // Target проверяется ДО Exit: при ошибке автомат не трогаем
        if self.states[id.index()].is_none() {
            return Err(FsmError::NotRegistered(id));
        }
        if let Some(previous) = self.current {
            if let Some(state) = self.states[previous.index()].as_mut() {
                state.exit(ctx);
            }
        }
        self.current = Some(id);
        if let Some(state) = self.states[id.index()].as_mut() {
            state.enter(ctx);
        }
        Ok(())
    }

    /// Покадровый update: forward текущему состоянию, затем применение
    /// запрошенного перехода (до следующего кадра). No-op без current.
    pub fn update(&mut self, ctx: &mut StateContext) -> Result<(), FsmError> {
        let Some(id) = self.current else {
            return Ok(());
        };
        let request = self.state_mut(id)?.update(ctx);
        if let Some(request) = request {
            self.apply(request, ctx)?;
        }
        Ok(())
    }

    /// Fixed-tick update: forward без канала переходов
    pub fn fixed_update(&mut self, ctx: &mut StateContext) -> Result<(), FsmError> {
        let Some(id) = self.current else {
            return Ok(());
        };
        self.state_mut(id)?.fixed_update(ctx);
        Ok(())
    }

    /// Применение запроса перехода
    ///
    /// Attack(mode): настройка Attack state и cadence перед самим переходом
    /// (запрашивающее состояние конфигурирует target через registry).
    fn apply(&mut self, request: StateRequest, ctx: &mut StateContext) -> Result<(), FsmError> {
        if let StateRequest::Attack(mode) = request {
            if let PlayerState::Attack(attack) = self.state_mut(StateId::Attack)? {
                attack.set_mode(mode);
            }
            ctx.firearm.rounds_per_second = mode.rounds_per_second();
        }
        self.set_current(request.id(), ctx)
    }
}
