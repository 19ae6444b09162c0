use crate::dispatch::PlayerId;
use crate::history::{HistoryBuffer, HistoryLimit, SessionBuffer};
use crate::render::events::render_event;
use crate::render::sink::DeliverySink;
use crate::render::text::{Color, StyledText, TextStyle};

/// Sent ahead of the replayed batch.
pub const END_OF_HISTORY: &str = "End of this server's messages.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentSummary {
    pub history: usize,
    pub session: usize,
}

/// Replays history and the current session to a single recipient.
///
/// Borrows both buffers immutably; presenting never consumes them.
pub struct Presenter<'a> {
    history: &'a HistoryBuffer,
    session: &'a SessionBuffer,
}

impl<'a> Presenter<'a> {
    pub fn new(history: &'a HistoryBuffer, session: &'a SessionBuffer) -> Self {
        Self { history, session }
    }

    pub fn present<S: DeliverySink + ?Sized>(
        &self,
        recipient: &PlayerId,
        limit: HistoryLimit,
        sink: &mut S,
    ) -> PresentSummary {
        let marker = StyledText::styled(END_OF_HISTORY, TextStyle::colored(Color::Gray).italic());
        sink.deliver(recipient, &marker, false);

        let history = self.history.newest(limit);
        for event in history {
            sink.deliver(recipient, &render_event(event), false);
        }

        for entry in self.session.entries() {
            sink.deliver(recipient, &entry.text, false);
        }

        PresentSummary {
            history: history.len(),
            session: self.session.len(),
        }
    }
}
