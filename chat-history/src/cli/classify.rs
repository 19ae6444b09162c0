use anyhow::Result;
use chat_history_core::archive::read_lines;
use chat_history_core::classify::{
    Classification, ClassifiedEvent, LineClassifier, MinecraftLogClassifier,
};
use std::io::{self, BufRead, Write};

pub fn run(show_discarded: bool, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    classify_lines(stdin.lock(), &mut out, show_discarded, json)?;
    out.flush()?;

    Ok(())
}

/// Classifies every line of `reader` the same way archives are read: invalid UTF-8 is
/// replaced instead of aborting the run.
fn classify_lines<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    show_discarded: bool,
    json: bool,
) -> Result<()> {
    let classifier = MinecraftLogClassifier::new();

    for line in read_lines(reader, 0)? {
        let line = line.text;

        match classifier.classify(&line) {
            Classification::Event(event) if json => {
                writeln!(out, "{}", serde_json::to_string(&event)?)?;
            }
            Classification::Event(event) => {
                writeln!(out, "{:<11} {}", event.label(), describe(&event))?;
            }
            Classification::Discarded(reason) if show_discarded => {
                writeln!(out, "{:<11} {:?}: {}", "discarded", reason, line)?;
            }
            Classification::Discarded(_) => {}
        }
    }

    Ok(())
}

fn describe(event: &ClassifiedEvent) -> String {
    match event {
        ClassifiedEvent::Chat { payload } | ClassifiedEvent::Emote { payload } => payload.clone(),
        ClassifiedEvent::JoinLeft { body } | ClassifiedEvent::Death { body } => body.clone(),
        ClassifiedEvent::Advancement { lead, suffix, .. } => format!("{lead}{suffix}"),
    }
}
