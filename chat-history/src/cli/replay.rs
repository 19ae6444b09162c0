use crate::terminal::to_ansi;
use anyhow::{Context, Result};
use chat_history_core::dispatch::{ConnectedPlayer, OPERATOR_PERMISSION_LEVEL, PlayerId};
use chat_history_core::render::{DeliverySink, StyledText};
use chat_history_core::runtime::{ChatHistoryRuntime, RuntimeOptions};
use std::io::{self, ErrorKind, IsTerminal, Write};
use std::path::PathBuf;

pub struct ReplayArgs {
    pub game_dir: PathBuf,
    pub config_dir: PathBuf,
    pub include_latest: bool,
    pub limit: Option<i64>,
}

/// Writes each delivered message as one line.
///
/// A closed reader (e.g. piped into `head`) quietly ends the output; any other write
/// error stops further writes and is reported by [`WriterSink::finish`].
struct WriterSink<W: Write> {
    color: bool,
    out: W,
    closed: bool,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    fn new(out: W, color: bool) -> Self {
        Self {
            color,
            out,
            closed: false,
            error: None,
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        match result {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => self.closed = true,
            Err(e) => self.error = Some(e),
        }
    }

    fn finish(mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if self.closed {
            return Ok(());
        }
        let flushed = self.out.flush();
        self.record(flushed);

        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> DeliverySink for WriterSink<W> {
    fn deliver(&mut self, _recipient: &PlayerId, text: &StyledText, _overlay: bool) {
        if self.closed || self.error.is_some() {
            return;
        }

        let line = if self.color {
            to_ansi(text)
        } else {
            text.to_string()
        };
        let written = writeln!(self.out, "{line}");
        self.record(written);
    }
}

pub fn run(args: ReplayArgs) -> Result<()> {
    let mut options = RuntimeOptions::new(args.game_dir, &args.config_dir);
    options.aggregate.include_latest = args.include_latest;

    let mut runtime = ChatHistoryRuntime::start(options).context("failed to start chat history")?;

    if let Some(limit) = args.limit {
        let mut config = runtime.config().clone();
        config.max_messages = limit;
        runtime.replace_config(config);
    }

    let console = ConnectedPlayer::new("console", "console", OPERATOR_PERMISSION_LEVEL);
    let mut sink = WriterSink::new(io::stdout().lock(), io::stdout().is_terminal());

    runtime.present_to(&console, &mut sink);
    sink.finish().context("failed to write history to stdout")?;

    Ok(())
}
