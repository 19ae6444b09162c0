use chat_history_core::dispatch::ConnectedPlayer;
use integration_tests::harness::{LogDirBuilder, RecordingSink, chat};

fn logs() -> LogDirBuilder {
    LogDirBuilder::new().archive("2023-01-01-1.log.gz", &[chat("Alice", "hello")])
}

fn op(id: &str) -> ConnectedPlayer {
    ConnectedPlayer::new(id, id, 2)
}

/// Simultaneous joins are served one per tick, in host order
#[test]
fn simultaneous_joins_are_spread_over_ticks() {
    let logs = logs();
    let mut runtime = logs.start();
    let mut sink = RecordingSink::default();
    let players = vec![op("alice"), op("bob"), op("carol")];

    for _ in 0..5 {
        runtime.on_tick(&players, &mut sink);
    }

    assert_eq!(sink.recipients(), vec!["alice", "bob", "carol"]);
    assert_eq!(sink.lines_for("bob").len(), 2);
}

/// A player who disconnects and reconnects is not replayed to again
#[test]
fn rejoining_player_is_not_replayed_to() {
    let logs = logs();
    let mut runtime = logs.start();
    let mut sink = RecordingSink::default();

    runtime.on_tick(&[op("alice")], &mut sink);
    runtime.on_tick(&[], &mut sink);
    runtime.on_tick(&[op("alice")], &mut sink);

    assert_eq!(sink.lines_for("alice").len(), 2);
}

/// Non-operators get nothing while operatorRequired is on, and are not retried
#[test]
fn denied_player_is_not_retried() {
    let logs = logs();
    let mut runtime = logs.start();
    let mut sink = RecordingSink::default();
    let bob = ConnectedPlayer::new("bob", "Bob", 0);

    runtime.on_tick(std::slice::from_ref(&bob), &mut sink);
    runtime.replace_config(chat_history_core::conf::HistoryConfig {
        operator_required: false,
        ..Default::default()
    });
    runtime.on_tick(std::slice::from_ref(&bob), &mut sink);

    assert!(sink.delivered.is_empty());
}
