//! The antagonist ticker on a paused clock.

use std::time::Duration;

use outpost_engine::ticker::{DEFAULT_PERIOD, WARNINGS};
use outpost_foundation::Location;
use outpost_runtime::demo;

use crate::Game;

/// In the kennel with the torch lit, the creature still asleep.
fn kennel() -> Game {
    let mut game = Game::at(demo::KENNEL);
    assert!(game.world.relocate(demo::TORCH, Location::Inventory));
    game.world.set_torch(true);
    game
}

#[tokio::test(start_paused = true)]
async fn warnings_until_the_creature_dies() {
    let mut game = kennel();
    let awakening = game.say("esamina poltiglia");
    assert!(game.dispatcher.ticker_running());
    assert_eq!(game.narration.recv().await.as_deref(), Some(awakening.as_str()));

    let start = tokio::time::Instant::now();
    assert_eq!(game.narration.recv().await.as_deref(), Some(WARNINGS[0]));
    assert_eq!(start.elapsed(), DEFAULT_PERIOD);
    assert_eq!(game.narration.recv().await.as_deref(), Some(WARNINGS[1]));

    let shots: Vec<String> = (0..4).map(|_| game.say("spara cosa")).collect();
    assert!(!game.dispatcher.ticker_running());

    tokio::time::sleep(DEFAULT_PERIOD * 5).await;
    assert_eq!(game.drain(), shots);
}

#[tokio::test(start_paused = true)]
async fn warnings_cycle_at_the_configured_period() {
    let mut game = kennel().with_ticker_period(Duration::from_secs(2));
    game.play("esamina poltiglia");
    game.drain();

    tokio::time::sleep(Duration::from_secs(7)).await;
    assert_eq!(game.drain(), [WARNINGS[0], WARNINGS[1], WARNINGS[2]]);
}

#[tokio::test(start_paused = true)]
async fn waking_twice_keeps_one_ticker() {
    let mut game = kennel();
    game.play("esamina poltiglia");
    game.world.flags.boss_activated = false;
    game.play("esamina poltiglia");
    game.drain();

    tokio::time::sleep(DEFAULT_PERIOD + Duration::from_millis(1)).await;
    assert_eq!(game.drain(), [WARNINGS[0]]);
}

#[tokio::test(start_paused = true)]
async fn closing_silences_the_ticker() {
    let mut game = kennel();
    game.play("esamina poltiglia");
    game.drain();

    game.dispatcher.close();
    assert!(!game.dispatcher.ticker_running());
    // The ticker task held the last sender; once it winds down the stream ends.
    assert_eq!(game.narration.recv().await, None);
}
