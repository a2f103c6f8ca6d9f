//! Headless симуляция IRONSIGHT
//!
//! Запускает Bevy App без рендера: спавнит игрока, скриптует input
//! (удержание Fire 1) и прогоняет тики — смоук полного цикла
//! Attack → auto-Reload → Attack.

use ironsight_simulation::{
    create_headless_app, Firearm, Player, PlayerFsm, PlayerInput, SimulationPlugin,
};

fn main() {
    println!("Starting IRONSIGHT headless simulation");

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);

    let player = app.world_mut().spawn(Player).id();

    // Прогоняем 1000 тиков: первые 600 — зажатый Fire 1
    for tick in 0..1000 {
        if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
            input.fire_primary = tick < 600;
        }

        app.update();

        if tick % 100 == 0 {
            let state = app
                .world()
                .get::<PlayerFsm>(player)
                .and_then(|fsm| fsm.current());
            if let Some(firearm) = app.world().get::<Firearm>(player) {
                println!(
                    "Tick {}: state={:?} magazine={} reserve={}",
                    tick, state, firearm.magazine, firearm.reserve
                );
            }
        }
    }

    println!("Simulation complete!");
}
