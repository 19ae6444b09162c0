//! Presentation
//!
//! Renders classified history and the live session into styled lines and hands them to
//! the host's delivery sink for one recipient.

mod events;
mod presenter;
mod sink;
mod text;


pub use events::render_event;
pub use presenter::{END_OF_HISTORY, PresentSummary, Presenter};
pub use sink::DeliverySink;
pub use text::{Color, Span, StyledText, TextStyle};
