//! The antagonist inside a running session, on a paused clock.

use std::time::Duration;

use outpost_engine::ticker::WARNINGS;
use outpost_runtime::SessionConfig;

use crate::{demo_session, drain};

const PERIOD: Duration = Duration::from_secs(5);

const TO_THE_KENNEL: [&str; 6] =
    ["prendi torcia", "vai nord", "vai nord", "vai nord", "vai est", "accendi torcia"];

#[tokio::test(start_paused = true)]
async fn the_creature_hunts_until_shot() {
    let config = SessionConfig::new().with_ticker_period(PERIOD);
    let (mut session, mut narration) = demo_session(&config);
    for line in TO_THE_KENNEL {
        session.handle_line(line);
    }
    session.handle_line("esamina poltiglia");
    assert!(session.ticker_running());
    drain(&mut narration);

    tokio::time::sleep(PERIOD * 2 + Duration::from_millis(1)).await;
    assert_eq!(drain(&mut narration), [WARNINGS[0], WARNINGS[1]]);

    assert_eq!(session.handle_line("fine").text(), "Non puoi uscire in questo momento!");
    assert!(!session.is_finished());

    for _ in 0..4 {
        session.handle_line("spara cosa");
    }
    assert!(!session.ticker_running());
    drain(&mut narration);

    tokio::time::sleep(PERIOD * 4).await;
    assert!(drain(&mut narration).is_empty());
}

#[tokio::test(start_paused = true)]
async fn closing_the_session_ends_the_stream() {
    let config = SessionConfig::new().with_ticker_period(PERIOD);
    let (mut session, mut narration) = demo_session(&config);
    for line in TO_THE_KENNEL {
        session.handle_line(line);
    }
    session.handle_line("esamina poltiglia");
    drain(&mut narration);

    session.close();
    assert!(!session.ticker_running());
    assert_eq!(narration.recv().await, None);
    assert!(session.handle_line("spara cosa").messages.is_empty());
}
