use crate::dispatch::types::{ConnectedPlayer, PlayerId};
use std::collections::HashSet;

/// Detects players seen for the first time since startup.
///
/// The known set only grows: a player who leaves and rejoins is never reported again.
#[derive(Debug, Default)]
pub struct JoinDispatcher {
    known: HashSet<PlayerId>,
}

impl JoinDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns at most one newcomer among this tick's players and marks it known.
    ///
    /// When several players appear on the same tick the first in `players` order is
    /// returned and the rest stay unknown, so the following ticks report them one by one.
    /// This deliberately does not union the whole tick into the known set: doing so would
    /// drop every joiner after the first instead of deferring them.
    pub fn tick<'a>(&mut self, players: &'a [ConnectedPlayer]) -> Option<&'a ConnectedPlayer> {
        let newcomer = players.iter().find(|p| !self.known.contains(&p.id))?;
        self.known.insert(newcomer.id.clone());

        let deferred = players
            .iter()
            .filter(|p| !self.known.contains(&p.id))
            .count();
        if deferred > 0 {
            tracing::debug!(deferred, "newcomers deferred to a later tick");
        }

        Some(newcomer)
    }

    pub fn is_known(&self, id: &PlayerId) -> bool {
        self.known.contains(id)
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }
}
