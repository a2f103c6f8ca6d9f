//! Firearm component — магазин, резерв, темп стрельбы
//!
//! Architecture:
//! - ECS хранит: ammo counters + cadence (game state)
//! - Host shell выполняет: muzzle flash, projectile spawn, recoil
//! - FSM Attack/Reload states — единственные писатели counters

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Режим стрельбы, выбирается при переходе Movement → Attack
///
/// Индексы 0/1/2 соответствуют анимационным флагам Attack1/Attack2/Attack3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum FireMode {
    /// Fire 1 (Full Auto) — 10 rps
    FullAuto,
    /// Fire 2 (Burst) — 6 rps
    Burst,
    /// Fire 3 (Single Shot) — 2 rps
    Single,
}

impl FireMode {
    /// Темп стрельбы режима (выстрелов в секунду)
    pub fn rounds_per_second(self) -> f32 {
        match self {
            FireMode::FullAuto => 10.0,
            FireMode::Burst => 6.0,
            FireMode::Single => 2.0,
        }
    }

    /// Имя bool-флага в AnimationTree хоста
    pub fn flag_name(self) -> &'static str {
        match self {
            FireMode::FullAuto => "Attack1",
            FireMode::Burst => "Attack2",
            FireMode::Single => "Attack3",
        }
    }
}

/// Оружие игрока (ammo state + cadence)
///
/// Инварианты: magazine ≤ magazine_capacity, reserve ≥ 0 —
/// оба соблюдаются при любой последовательности fire/auto-reload.
///
/// Сериализуется для loadout snapshots (save/load игрока).
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Firearm {
    /// Патроны в магазине
    pub magazine: u32,
    /// Резерв (незаряженные патроны)
    pub reserve: u32,
    /// Ёмкость магазина
    pub magazine_capacity: u32,
    /// Текущий темп стрельбы (задаётся выбранным FireMode)
    pub rounds_per_second: f32,
}

impl Default for Firearm {
    fn default() -> Self {
        Self::service_rifle()
    }
}

impl Firearm {
    /// Стандартная винтовка игрока
    pub fn service_rifle() -> Self {
        Self {
            magazine: 12,
            reserve: 36,
            magazine_capacity: 12,
            rounds_per_second: FireMode::FullAuto.rounds_per_second(),
        }
    }

    /// Один выстрел — списывает патрон из магазина
    ///
    /// Пустой магазин перехватывается Attack state ДО вызова (auto-reload),
    /// saturating на случай прямого вызова.
    pub fn fire(&mut self) {
        self.magazine = self.magazine.saturating_sub(1);
    }

    /// Период каденции (секунды между выстрелами при зажатом триггере)
    pub fn cadence_period(&self) -> f32 {
        1.0 / self.rounds_per_second
    }

    pub fn magazine_empty(&self) -> bool {
        self.magazine == 0
    }

    pub fn reserve_empty(&self) -> bool {
        self.reserve == 0
    }

    /// Перераспределение патронов на выходе из Reload
    ///
    /// ⚠️ Формула сохранена из оригинального баланса, тесты кодируют
    /// именно это поведение — не «исправлять» без явного запроса
    /// геймдизайна:
    /// - в overflow-ветке из резерва вычитается ПОСТ-инкрементный
    ///   магазин, а не размер долитой порции (saturating — резерв не
    ///   уходит ниже нуля);
    /// - reserve == magazine_capacity не попадает ни в одну ветку:
    ///   перезарядка ничего не меняет (тупик баланса — автомат
    ///   зацикливается Attack → Reload на последней полной пачке).
    pub fn refill_from_reserve(&mut self) {
        if self.reserve > self.magazine_capacity {
            self.magazine += self.magazine_capacity;
            self.reserve = self.reserve.saturating_sub(self.magazine);
        } else if self.reserve > 0 && self.reserve < self.magazine_capacity {
            self.magazine += self.reserve;
            self.reserve = 0;
        }
        // reserve == 0 → патронов нет, ничего не меняем
    }
}
