/// Marker present on every regular server log entry.
pub const SERVER_INFO: &str = "[Server thread/INFO]";

/// Marker variant written for unsigned chat.
pub const SERVER_INFO_NOT_SECURE: &str = "[Server thread/INFO] [Not Secure]";

/// Older servers log console chat as `[Server thread/INFO] (Minecraft) text`.
pub(crate) const LEGACY_CONSOLE_ARTIFACT: &str = " (Minecraft) ";

/// Lines containing any of these never reach the history.
pub const BLACKLIST: &[&str] = &[
    ", message:",
    "lost connection: ",
    "Exception",
    // invalid command echo
    "<--[HERE]",
];

pub(crate) const JOINED: &str = " joined the game";
pub(crate) const LEFT: &str = " left the game";
pub(crate) const CHALLENGE: &str = " has completed the challenge ";
pub(crate) const ADVANCEMENT: &str = " has made the advancement ";
pub(crate) const MESSAGE_FIELD: &str = ", message: ";

/// Substrings that identify a vanilla death message.
///
/// `" was "` covers most of the "was slain/shot/blown up by" family and will also match
/// unrelated server text that reaches the announcement branch.
pub const DEATH_MARKERS: &[&str] = &[
    " was ",
    " drowned",
    " died",
    " experienced kinetic energy",
    " blew up",
    " hit the ground too hard",
    " fell",
    " went up in flames",
    " walked ",
    " burned ",
    " went off with a bang",
    " tried to swim in lava",
    " to death",
    " suffocated in a wall",
    " left the confines of this world",
    " didn't want to live in the same world as ",
    " withered ",
];
