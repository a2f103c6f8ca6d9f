//! FSM driver systems (boot, per-frame update, fixed tick).
//!
//! Driver собирает StateContext из компонентов игрока, прокачивает
//! автомат и сливает анимационные команды в события для host shell.
//! Ошибки автомата — конфигурационные: логируются как error, не retry.

use bevy::prelude::*;

use crate::animation::{AnimationChannel, AnimationCommandEvent};
use crate::components::{Firearm, LocomotionCommand, PlayerInput};
use crate::logger;
use crate::player::fsm::{PlayerFsm, StateContext, StateId};

/// Система: explicit initial state для свежезаспавненных игроков
///
/// Контрактный шаг host setup «до первого Update»: current не выставляется
/// неявно, автомат стартует в Movement ровно один раз (Added-фильтр).
pub fn boot_player_fsm(
    mut players: Query<
        (
            Entity,
            &mut PlayerFsm,
            &mut Firearm,
            &PlayerInput,
            &mut LocomotionCommand,
        ),
        Added<PlayerFsm>,
    >,
    mut animation_events: EventWriter<AnimationCommandEvent>,
) {
    for (entity, mut fsm, mut firearm, input, mut locomotion) in players.iter_mut() {
        let mut channel = AnimationChannel::default();
        let mut ctx = StateContext {
            firearm: &mut *firearm,
            input,
            animation: &mut channel,
            locomotion: &mut *locomotion,
            delta: 0.0,
        };

        if let Err(err) = fsm.set_current(StateId::Movement, &mut ctx) {
            logger::log_error(&format!("Player {:?}: FSM boot failed: {}", entity, err));
            continue;
        }

        flush_animation(entity, &mut channel, &mut animation_events);
        logger::log(&format!("🎮 Player {:?}: FSM booted in Movement", entity));
    }
}

/// Система: покадровый Update текущего состояния
///
/// Порядок в кадре: сброс LocomotionCommand → update автомата (Movement
/// снова запросит Drive, если активен) → слив анимационных команд.
pub fn drive_player_fsm(
    mut players: Query<(
        Entity,
        &mut PlayerFsm,
        &mut Firearm,
        &PlayerInput,
        &mut LocomotionCommand,
    )>,
    time: Res<Time>,
    mut animation_events: EventWriter<AnimationCommandEvent>,
) {
    for (entity, mut fsm, mut firearm, input, mut locomotion) in players.iter_mut() {
        *locomotion = LocomotionCommand::Idle;

        let previous = fsm.current();
        let mut channel = AnimationChannel::default();
        let mut ctx = StateContext {
            firearm: &mut *firearm,
            input,
            animation: &mut channel,
            locomotion: &mut *locomotion,
            delta: time.delta_secs(),
        };

        if let Err(err) = fsm.update(&mut ctx) {
            logger::log_error(&format!("Player {:?}: FSM update failed: {}", entity, err));
            continue;
        }

        if let (Some(from), Some(to)) = (previous, fsm.current()) {
            if from != to {
                logger::log(&format!("Player {:?}: {:?} → {:?}", entity, from, to));
            }
        }

        flush_animation(entity, &mut channel, &mut animation_events);
    }
}

/// Система: FixedUpdate forward (60Hz tick)
pub fn drive_player_fsm_fixed(
    mut players: Query<(
        Entity,
        &mut PlayerFsm,
        &mut Firearm,
        &PlayerInput,
        &mut LocomotionCommand,
    )>,
    time: Res<Time<Fixed>>,
    mut animation_events: EventWriter<AnimationCommandEvent>,
) {
    for (entity, mut fsm, mut firearm, input, mut locomotion) in players.iter_mut() {
        let mut channel = AnimationChannel::default();
        let mut ctx = StateContext {
            firearm: &mut *firearm,
            input,
            animation: &mut channel,
            locomotion: &mut *locomotion,
            delta: time.delta_secs(),
        };

        if let Err(err) = fsm.fixed_update(&mut ctx) {
            logger::log_error(&format!(
                "Player {:?}: FSM fixed_update failed: {}",
                entity, err
            ));
            continue;
        }

        flush_animation(entity, &mut channel, &mut animation_events);
    }
}

/// Система: сброс одноразовых (pressed) input-сигналов после driver
///
/// Host shell пишет reload как edge; кадр закончился — сигнал снят.
pub fn clear_input_edges(mut players: Query<&mut PlayerInput>) {
    for mut input in players.iter_mut() {
        if input.reload {
            input.clear_edges();
        }
    }
}

fn flush_animation(
    entity: Entity,
    channel: &mut AnimationChannel,
    events: &mut EventWriter<AnimationCommandEvent>,
) {
    for command in channel.drain() {
        events.write(AnimationCommandEvent { entity, command });
    }
}
