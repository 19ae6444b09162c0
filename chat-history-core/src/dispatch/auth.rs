use crate::conf::HistoryConfig;
use crate::dispatch::types::ConnectedPlayer;

/// Permission level the host grants to server operators.
pub const OPERATOR_PERMISSION_LEVEL: u8 = 2;

/// Whether `player` is allowed to receive history under `config`.
pub fn may_view_history(player: &ConnectedPlayer, config: &HistoryConfig) -> bool {
    !config.operator_required || player.permission_level >= OPERATOR_PERMISSION_LEVEL
}
