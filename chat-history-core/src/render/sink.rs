use crate::dispatch::PlayerId;
use crate::render::text::StyledText;

/// Host channel that shows a line to one player.
///
/// `overlay` selects the action bar instead of the chat window; replay always passes
/// `false`.
pub trait DeliverySink {
    fn deliver(&mut self, recipient: &PlayerId, text: &StyledText, overlay: bool);
}

