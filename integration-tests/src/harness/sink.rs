use chat_history_core::dispatch::PlayerId;
use chat_history_core::render::{DeliverySink, StyledText};

#[derive(Debug, Clone)]
pub struct Delivered {
    pub recipient: PlayerId,
    pub text: StyledText,
    pub overlay: bool,
}

/// Sink that remembers every delivered line.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub delivered: Vec<Delivered>,
}

impl DeliverySink for RecordingSink {
    fn deliver(&mut self, recipient: &PlayerId, text: &StyledText, overlay: bool) {
        self.delivered.push(Delivered {
            recipient: recipient.clone(),
            text: text.clone(),
            overlay,
        });
    }
}

impl RecordingSink {
    /// Plain text of everything delivered to `id`, in delivery order.
    pub fn lines_for(&self, id: &str) -> Vec<String> {
        self.delivered
            .iter()
            .filter(|d| d.recipient.0 == id)
            .map(|d| d.text.to_string())
            .collect()
    }

    /// Recipients in the order they first received something.
    pub fn recipients(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for d in &self.delivered {
            if !out.contains(&d.recipient.0) {
                out.push(d.recipient.0.clone());
            }
        }
        out
    }
}
