use crate::classify::{ClassifiedEvent, MinecraftLogClassifier};
use crate::history::{AggregateOptions, LATEST_LOG, aggregate_history};
use crate::test_helpers::{info, write_gz};

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn payloads(events: &[ClassifiedEvent]) -> Vec<String> {
    events
        .iter()
        .map(|e| match e {
            ClassifiedEvent::Chat { payload } | ClassifiedEvent::Emote { payload } => {
                payload.clone()
            }
            ClassifiedEvent::JoinLeft { body } | ClassifiedEvent::Death { body } => body.clone(),
            ClassifiedEvent::Advancement { lead, suffix, .. } => format!("{lead}{suffix}"),
        })
        .collect()
}

#[test]
fn older_files_come_first_and_keep_their_line_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_gz(
        &root.join("2023-01-02-1.log.gz"),
        &[&info("<Bob> third"), &info("<Bob> fourth")],
    );
    write_gz(
        &root.join("2023-01-01-1.log.gz"),
        &[&info("<Alice> first"), &info("<Alice> second")],
    );

    // Act
    let (history, summary) = aggregate_history(
        root,
        &MinecraftLogClassifier::new(),
        AggregateOptions::default(),
    );

    // Assert
    assert_eq!(
        payloads(history.all()),
        vec![
            "<Alice> first",
            "<Alice> second",
            "<Bob> third",
            "<Bob> fourth"
        ]
    );
    assert_eq!(summary.files_read, 2);
    assert_eq!(summary.events, 4);
}

#[test]
fn noise_lines_are_discarded() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_gz(
        &root.join("2023-01-01-1.log.gz"),
        &[
            &info("Starting minecraft server version 1.20.1"),
            &info("Bob joined the game"),
            &info("Bob lost connection: Disconnected"),
            "[12:00:01] [Server thread/WARN]: Can't keep up!",
            &info("Bob left the game"),
        ],
    );

    // Act
    let (history, summary) = aggregate_history(
        root,
        &MinecraftLogClassifier::new(),
        AggregateOptions::default(),
    );

    // Assert
    assert_eq!(
        payloads(history.all()),
        vec!["Bob joined the game", "Bob left the game"]
    );
    assert_eq!(summary.lines, 5);
    assert_eq!(summary.discarded, 3);
}

#[test]
fn unreadable_archive_is_skipped_without_affecting_others() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_gz(&root.join("2023-01-01-1.log.gz"), &[&info("<Alice> first")]);
    fs::write(root.join("2023-01-02-1.log.gz"), "corrupt").unwrap();
    write_gz(&root.join("2023-01-03-1.log.gz"), &[&info("<Carol> last")]);

    // Act
    let (history, summary) = aggregate_history(
        root,
        &MinecraftLogClassifier::new(),
        AggregateOptions::default(),
    );

    // Assert
    assert_eq!(payloads(history.all()), vec!["<Alice> first", "<Carol> last"]);
    assert_eq!(summary.files_read, 2);
    assert_eq!(summary.files_skipped, vec![root.join("2023-01-02-1.log.gz")]);
}

#[test]
fn latest_log_is_appended_only_when_requested() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_gz(&root.join("2023-01-01-1.log.gz"), &[&info("<Alice> archived")]);
    fs::write(root.join(LATEST_LOG), format!("{}\n", info("<Bob> live"))).unwrap();

    // Act
    let (without, _) = aggregate_history(
        root,
        &MinecraftLogClassifier::new(),
        AggregateOptions::default(),
    );
    let (with, _) = aggregate_history(
        root,
        &MinecraftLogClassifier::new(),
        AggregateOptions {
            include_latest: true,
        },
    );

    // Assert
    assert_eq!(payloads(without.all()), vec!["<Alice> archived"]);
    assert_eq!(
        payloads(with.all()),
        vec!["<Alice> archived", "<Bob> live"]
    );
}

#[test]
fn missing_log_folder_yields_empty_history() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let (history, summary) = aggregate_history(
        &dir.path().join("logs"),
        &MinecraftLogClassifier::new(),
        AggregateOptions::default(),
    );

    // Assert
    assert!(history.is_empty());
    assert_eq!(summary.files_read, 0);
}
