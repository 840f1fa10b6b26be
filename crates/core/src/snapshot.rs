use crate::types::{CompletionReason, Direction, PairKey, TileId};

/// Turn phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Created but not started
    #[default]
    Idle,
    AwaitingFirstFlip,
    AwaitingSecondFlip,
    /// Two tiles are shown; input is held until the pair is resolved
    Resolving,
    Complete(CompletionReason),
}

impl Phase {
    /// Accepts move and flip commands.
    pub fn playable(&self) -> bool {
        matches!(self, Phase::AwaitingFirstFlip | Phase::AwaitingSecondFlip)
    }

    pub fn completion(&self) -> Option<CompletionReason> {
        match self {
            Phase::Complete(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// What a tile currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFace {
    Hidden,
    /// Face-up, waiting to be compared
    Shown,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub id: TileId,
    pub key: PairKey,
    pub face: TileFace,
    pub opened: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayerSnapshot {
    pub row: u8,
    pub column: u8,
    pub orientation: Direction,
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub rows: u8,
    pub columns: u8,
    /// Row-major, indexed by tile id
    pub tiles: Vec<TileSnapshot>,
    pub player: PlayerSnapshot,
    pub remaining_seconds: i32,
    pub critical: bool,
    pub unsolved_count: u16,
    pub phase: Phase,
    pub seed: u32,
}

impl GameSnapshot {
    /// Tile at a 1-indexed cell
    pub fn tile_at(&self, row: u8, column: u8) -> Option<&TileSnapshot> {
        if row < 1 || column < 1 || row > self.rows || column > self.columns {
            return None;
        }
        let idx = (row as usize - 1) * self.columns as usize + (column as usize - 1);
        self.tiles.get(idx)
    }

    pub fn pairs_left(&self) -> u16 {
        self.unsolved_count / 2
    }
}

/// State change notification for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// Tile turned face-up
    TileShown(TileId),
    /// Tile turned back face-down after a mismatch
    TileHidden(TileId),
    PairSolved([TileId; 2]),
    PlayerMoved {
        row: u8,
        column: u8,
        orientation: Direction,
    },
    TimeChanged {
        remaining_seconds: i32,
        critical: bool,
    },
    /// Terminal event; nothing follows it
    Completed(CompletionReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_playable() {
        assert!(!Phase::Idle.playable());
        assert!(Phase::AwaitingFirstFlip.playable());
        assert!(Phase::AwaitingSecondFlip.playable());
        assert!(!Phase::Resolving.playable());
        assert!(!Phase::Complete(CompletionReason::NoTime).playable());
    }

    #[test]
    fn test_tile_at_bounds() {
        let mut snap = GameSnapshot {
            rows: 1,
            columns: 2,
            ..GameSnapshot::default()
        };
        for id in 0..2 {
            snap.tiles.push(TileSnapshot {
                id,
                key: 9,
                face: TileFace::Hidden,
                opened: false,
            });
        }
        assert_eq!(snap.tile_at(1, 2).map(|t| t.id), Some(1));
        assert!(snap.tile_at(2, 1).is_none());
        assert!(snap.tile_at(0, 1).is_none());
    }
}
