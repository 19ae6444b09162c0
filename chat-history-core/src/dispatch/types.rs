use std::fmt;

/// Stable identity of a connected player, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player present in the world on the current tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedPlayer {
    pub id: PlayerId,
    pub name: String,
    pub permission_level: u8,
}

impl ConnectedPlayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, permission_level: u8) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            permission_level,
        }
    }
}
