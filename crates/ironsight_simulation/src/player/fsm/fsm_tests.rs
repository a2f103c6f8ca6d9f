//! Tests for the player combat FSM (registry, transitions, cadence, ammo).

use super::*;
use crate::animation::{AnimationChannel, AnimationCommand};
use crate::components::{FireMode, Firearm, LocomotionCommand, PlayerInput};

/// Тестовый стенд: автомат + контекст актора без App
struct Harness {
    fsm: PlayerFsm,
    firearm: Firearm,
    input: PlayerInput,
    channel: AnimationChannel,
    locomotion: LocomotionCommand,
}

impl Harness {
    fn new() -> Self {
        let mut harness = Self {
            fsm: PlayerFsm::player(),
            firearm: Firearm::service_rifle(),
            input: PlayerInput::default(),
            channel: AnimationChannel::default(),
            locomotion: LocomotionCommand::Idle,
        };
        // Явный initial state, как делает host setup
        harness.set_current(StateId::Movement);
        harness
    }

    fn set_current(&mut self, id: StateId) {
        let mut ctx = StateContext {
            firearm: &mut self.firearm,
            input: &self.input,
            animation: &mut self.channel,
            locomotion: &mut self.locomotion,
            delta: 0.0,
        };
        self.fsm.set_current(id, &mut ctx).unwrap();
    }

    /// Один кадр: сброс локомоции, update, сброс edge-сигналов
    fn step(&mut self, delta: f32) {
        self.locomotion = LocomotionCommand::Idle;
        let mut ctx = StateContext {
            firearm: &mut self.firearm,
            input: &self.input,
            animation: &mut self.channel,
            locomotion: &mut self.locomotion,
            delta,
        };
        self.fsm.update(&mut ctx).unwrap();
        self.input.clear_edges();
    }

    fn current(&self) -> StateId {
        self.fsm.current().unwrap()
    }

    fn drain(&mut self) -> Vec<AnimationCommand> {
        self.channel.drain().collect()
    }
}

#[test]
fn test_registry_round_trip() {
    let mut harness = Harness::new();

    for id in [
        StateId::Crouch,
        StateId::Attack,
        StateId::Reload,
        StateId::TakeDamage,
        StateId::Dead,
        StateId::Movement,
    ] {
        harness.set_current(id);
        assert_eq!(harness.current(), id);
        assert_eq!(harness.fsm.state(id).unwrap().id(), id);
    }
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut fsm = PlayerFsm::new();
    fsm.register(PlayerState::Movement(MovementState::new()))
        .unwrap();

    let err = fsm
        .register(PlayerState::Movement(MovementState::new()))
        .unwrap_err();
    assert_eq!(err, FsmError::AlreadyRegistered(StateId::Movement));
}

#[test]
fn test_unregistered_lookup_fails() {
    let mut fsm = PlayerFsm::new();
    assert_eq!(
        fsm.state(StateId::Attack).unwrap_err(),
        FsmError::NotRegistered(StateId::Attack)
    );
    assert_eq!(
        fsm.state_mut(StateId::Reload).unwrap_err(),
        FsmError::NotRegistered(StateId::Reload)
    );

    // Переход в незарегистрированное состояние — конфигурационная ошибка
    let mut firearm = Firearm::service_rifle();
    let input = PlayerInput::default();
    let mut channel = AnimationChannel::default();
    let mut locomotion = LocomotionCommand::Idle;
    let mut ctx = StateContext {
        firearm: &mut firearm,
        input: &input,
        animation: &mut channel,
        locomotion: &mut locomotion,
        delta: 0.0,
    };
    assert_eq!(
        fsm.set_current(StateId::Dead, &mut ctx).unwrap_err(),
        FsmError::NotRegistered(StateId::Dead)
    );
    assert_eq!(fsm.current(), None); // Автомат не тронут
}

#[test]
fn test_update_is_noop_without_initial_state() {
    // Неявного default нет: до set_current update ничего не делает
    let mut fsm = PlayerFsm::player();
    let mut firearm = Firearm::service_rifle();
    let input = PlayerInput {
        fire_primary: true,
        ..Default::default()
    };
    let mut channel = AnimationChannel::default();
    let mut locomotion = LocomotionCommand::Idle;
    let mut ctx = StateContext {
        firearm: &mut firearm,
        input: &input,
        animation: &mut channel,
        locomotion: &mut locomotion,
        delta: 0.1,
    };

    fsm.update(&mut ctx).unwrap();
    fsm.fixed_update(&mut ctx).unwrap();

    assert_eq!(fsm.current(), None);
    assert_eq!(firearm.magazine, 12);
    assert!(channel.is_empty());
}

#[test]
fn test_reentry_does_not_rerun_hooks() {
    let mut harness = Harness::new();
    harness.input.crouch = true;

    harness.set_current(StateId::Crouch);
    let entered = harness.drain();
    assert_eq!(
        entered,
        vec![AnimationCommand::SetFlag {
            name: "Crouch",
            value: true
        }]
    );

    // Повторный вход в текущее состояние: Enter/Exit не перезапускаются
    harness.set_current(StateId::Crouch);
    assert!(harness.channel.is_empty());
    assert_eq!(harness.current(), StateId::Crouch);
}

#[test]
fn test_movement_primary_fire_selects_full_auto() {
    let mut harness = Harness::new();
    harness.input.fire_primary = true;

    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Attack);
    assert_eq!(harness.firearm.rounds_per_second, 10.0);
    if let PlayerState::Attack(attack) = harness.fsm.state(StateId::Attack).unwrap() {
        assert_eq!(attack.mode(), FireMode::FullAuto);
    } else {
        panic!("Attack slot держит не Attack вариант");
    }
    assert!(harness.drain().contains(&AnimationCommand::SetFlag {
        name: "Attack1",
        value: true
    }));
}

#[test]
fn test_movement_tertiary_fire_selects_single_shot() {
    let mut harness = Harness::new();
    harness.input.fire_tertiary = true;

    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Attack);
    assert_eq!(harness.firearm.rounds_per_second, 2.0);
    assert!(harness.drain().contains(&AnimationCommand::SetFlag {
        name: "Attack3",
        value: true
    }));
}

#[test]
fn test_crouch_wins_tie_over_reload() {
    // reload pressed + crouch held в одном кадре: последняя проверка
    // (crouch) перезаписывает запрос
    let mut harness = Harness::new();
    harness.input.reload = true;
    harness.input.crouch = true;

    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Crouch);
}

#[test]
fn test_crouch_wins_tie_over_everything() {
    let mut harness = Harness::new();
    harness.input.fire_primary = true;
    harness.input.fire_secondary = true;
    harness.input.fire_tertiary = true;
    harness.input.reload = true;
    harness.input.crouch = true;

    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Crouch);
}

#[test]
fn test_reload_pressed_enters_reload() {
    let mut harness = Harness::new();
    harness.input.reload = true;

    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Reload);
    assert!(harness
        .drain()
        .contains(&AnimationCommand::Trigger { name: "Reload" }));

    // reload — edge: следующий кадр уже без сигнала (снят clear_edges)
    assert!(!harness.input.reload);
}

#[test]
fn test_crouch_releases_to_movement() {
    let mut harness = Harness::new();
    harness.input.crouch = true;
    harness.step(0.016);
    assert_eq!(harness.current(), StateId::Crouch);

    harness.input.crouch = false;
    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Movement);
    assert!(harness.drain().contains(&AnimationCommand::SetFlag {
        name: "Crouch",
        value: false
    }));
}

#[test]
fn test_attack_cadence_two_rps() {
    // 2 rps, удержание 1.5 сек шагами 0.1 → ровно 3 выстрела
    let mut harness = Harness::new();
    harness.input.fire_tertiary = true;
    harness.step(0.1); // Movement → Attack (переход, без выстрела)
    assert_eq!(harness.current(), StateId::Attack);
    assert_eq!(harness.firearm.magazine, 12);

    for _ in 0..15 {
        harness.step(0.1);
    }

    assert_eq!(harness.firearm.magazine, 9); // t=0, t=0.6, t=1.2
    assert_eq!(harness.current(), StateId::Attack);
}

#[test]
fn test_attack_fires_once_per_hold_start() {
    let mut harness = Harness::new();
    harness.input.fire_primary = true;
    harness.step(0.016); // → Attack

    harness.step(0.016); // Первый кадр удержания: выстрел
    assert_eq!(harness.firearm.magazine, 11);

    harness.step(0.016); // Аккумулятор != 0 → без выстрела
    assert_eq!(harness.firearm.magazine, 11);
}

#[test]
fn test_attack_release_returns_to_movement() {
    let mut harness = Harness::new();
    harness.input.fire_primary = true;
    harness.step(0.016);
    harness.step(0.016);
    assert_eq!(harness.current(), StateId::Attack);
    harness.drain();

    harness.input.fire_primary = false;
    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Movement);
    assert!(harness.drain().contains(&AnimationCommand::SetFlag {
        name: "Attack1",
        value: false
    }));
}

#[test]
fn test_attack_auto_reloads_on_empty_magazine() {
    let mut harness = Harness::new();
    harness.firearm.magazine = 0;
    harness.firearm.reserve = 30;
    harness.set_current(StateId::Attack);

    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Reload);
}

#[test]
fn test_attack_exits_when_reserve_empty() {
    // Резерв пуст → Movement, даже с патронами в магазине и зажатым
    // триггером (исходное поведение: остаток магазина не дострелять)
    let mut harness = Harness::new();
    harness.firearm.magazine = 5;
    harness.firearm.reserve = 0;
    harness.input.fire_primary = true;
    harness.set_current(StateId::Attack);

    harness.step(0.016);

    assert_eq!(harness.current(), StateId::Movement);
    assert_eq!(harness.firearm.magazine, 5);
}

#[test]
fn test_reload_timer_and_ammo_redistribution() {
    let mut harness = Harness::new();
    harness.firearm.magazine = 0;
    harness.firearm.reserve = 30;
    harness.input.reload = true;

    harness.step(0.016); // Movement → Reload, enter (таймер = 0)
    assert_eq!(harness.current(), StateId::Reload);

    harness.step(1.0);
    harness.step(1.0);
    assert_eq!(harness.current(), StateId::Reload); // 2.0 < 3.0

    harness.step(1.0); // 3.0 ≥ RELOAD_TIME → Movement, Exit раздаёт патроны
    assert_eq!(harness.current(), StateId::Movement);

    // Формула из баланса: 30 - (0 + 12) = 18, не 30 - 12 долитых
    assert_eq!(harness.firearm.magazine, 12);
    assert_eq!(harness.firearm.reserve, 18);
}

#[test]
fn test_reload_has_no_early_exit() {
    let mut harness = Harness::new();
    harness.firearm.magazine = 0;
    harness.input.reload = true;
    harness.step(0.016);
    assert_eq!(harness.current(), StateId::Reload);

    // Никакие триггеры не прерывают перезарядку
    harness.input.fire_primary = true;
    harness.input.crouch = true;
    harness.step(1.0);
    harness.step(1.0);
    assert_eq!(harness.current(), StateId::Reload);
}

#[test]
fn test_ammo_invariants_over_full_auto_cycle() {
    // Полный расход боезапаса через auto-reload циклы: инварианты
    // magazine ≤ capacity и reserve ≥ 0 держатся каждый кадр
    let mut harness = Harness::new();
    harness.input.fire_primary = true;

    for _ in 0..4000 {
        harness.step(0.05);

        assert!(harness.firearm.magazine <= harness.firearm.magazine_capacity);
        // reserve: u32 — неотрицательность по типу, проверяем отсутствие wrap
        assert!(harness.firearm.reserve <= 36);
    }

    // Тупик баланса: резерв дошёл до ровно одной ёмкости (36 → 24 → 12),
    // перезарядка при reserve == capacity ничего не меняет, автомат
    // зациклен Attack → Reload с пустым магазином — сохранённое поведение
    assert_eq!(harness.firearm.reserve, 12);
    assert_eq!(harness.firearm.magazine, 0);
    assert!(matches!(
        harness.current(),
        StateId::Attack | StateId::Reload | StateId::Movement
    ));
}

#[test]
fn test_full_auto_parks_in_reload_cycle_at_exact_capacity_reserve() {
    // Последняя полная пачка в резерве: Attack видит пустой магазин и
    // непустой резерв → Reload, Exit перезарядки — no-op, снова Attack.
    // Патроны больше не убывают.
    let mut harness = Harness::new();
    harness.firearm.magazine = 0;
    harness.firearm.reserve = 12;
    harness.input.fire_primary = true;
    harness.set_current(StateId::Attack);

    for _ in 0..200 {
        harness.step(0.1);
        assert!(matches!(
            harness.current(),
            StateId::Attack | StateId::Reload | StateId::Movement
        ));
    }

    assert_eq!(harness.firearm.magazine, 0);
    assert_eq!(harness.firearm.reserve, 12);
}

#[test]
fn test_dead_and_take_damage_unreachable_via_inputs() {
    // Легальные входы никогда не дают Dead/TakeDamage: входящих
    // переходов нет до появления системы урона (документируемый gap)
    let mut harness = Harness::new();

    for frame in 0..600 {
        harness.input.fire_primary = frame % 7 < 3;
        harness.input.fire_secondary = frame % 11 < 2;
        harness.input.fire_tertiary = frame % 13 < 2;
        harness.input.crouch = frame % 5 < 2;
        harness.input.reload = frame % 17 == 0;

        harness.step(0.033);

        let current = harness.current();
        assert_ne!(current, StateId::Dead, "frame {}", frame);
        assert_ne!(current, StateId::TakeDamage, "frame {}", frame);
    }
}

#[test]
fn test_dead_cue_on_direct_entry() {
    // Прямой вход (в обход графа) — документируем stub-поведение
    let mut harness = Harness::new();
    harness.set_current(StateId::Dead);

    assert!(harness
        .drain()
        .contains(&AnimationCommand::Trigger { name: "Die" }));

    // Выходов из Dead нет
    harness.step(0.016);
    harness.step(0.016);
    assert_eq!(harness.current(), StateId::Dead);
}

#[test]
fn test_take_damage_is_inert_stub() {
    let mut harness = Harness::new();
    harness.set_current(StateId::TakeDamage);
    assert!(harness.channel.is_empty()); // Без presentation cue

    harness.input.crouch = true;
    harness.step(0.016);
    assert_eq!(harness.current(), StateId::TakeDamage);
}

#[test]
fn test_movement_drives_locomotion_every_frame() {
    let mut harness = Harness::new();

    harness.step(0.016);
    assert_eq!(harness.locomotion, LocomotionCommand::Drive);

    // В Crouch локомоция не запрашивается
    harness.input.crouch = true;
    harness.step(0.016);
    harness.step(0.016);
    assert_eq!(harness.current(), StateId::Crouch);
    assert_eq!(harness.locomotion, LocomotionCommand::Idle);
}
