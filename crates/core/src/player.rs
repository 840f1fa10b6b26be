//! Player cursor: a 1-indexed cell plus the direction it faces.

use crate::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    row: u8,
    column: u8,
    orientation: Direction,
}

impl Player {
    pub fn new(name: impl Into<String>, row: u8, column: u8) -> Self {
        Self {
            name: name.into(),
            row,
            column,
            orientation: Direction::Up,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn orientation(&self) -> Direction {
        self.orientation
    }

    /// Step one cell inside a `rows x columns` board.
    ///
    /// Orientation always becomes `side`; the position only changes when the
    /// step stays on the board. Returns whether the cursor moved.
    pub fn step(&mut self, side: Direction, rows: u8, columns: u8) -> bool {
        self.orientation = side;
        match side {
            Direction::Left if self.column > 1 => self.column -= 1,
            Direction::Up if self.row > 1 => self.row -= 1,
            Direction::Right if self.column < columns => self.column += 1,
            Direction::Down if self.row < rows => self.row += 1,
            _ => return false,
        }
        true
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Player", 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_faces_up() {
        let player = Player::new("ana", 1, 1);
        assert_eq!(player.orientation(), Direction::Up);
        assert_eq!((player.row(), player.column()), (1, 1));
        assert_eq!(player.name(), "ana");
    }

    #[test]
    fn test_step_moves_inside_board() {
        let mut player = Player::default();
        assert!(player.step(Direction::Right, 3, 3));
        assert!(player.step(Direction::Down, 3, 3));
        assert_eq!((player.row(), player.column()), (2, 2));
        assert!(player.step(Direction::Left, 3, 3));
        assert!(player.step(Direction::Up, 3, 3));
        assert_eq!((player.row(), player.column()), (1, 1));
    }

    #[test]
    fn test_step_clamps_but_turns() {
        let mut player = Player::default();
        assert!(!player.step(Direction::Left, 2, 2));
        assert_eq!(player.orientation(), Direction::Left);
        assert!(!player.step(Direction::Up, 2, 2));
        assert_eq!(player.orientation(), Direction::Up);
        assert_eq!((player.row(), player.column()), (1, 1));

        let mut player = Player::new("p", 2, 2);
        assert!(!player.step(Direction::Right, 2, 2));
        assert!(!player.step(Direction::Down, 2, 2));
        assert_eq!(player.orientation(), Direction::Down);
        assert_eq!((player.row(), player.column()), (2, 2));
    }

    #[test]
    fn test_long_walk_stays_in_bounds() {
        let mut player = Player::default();
        let script = [
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        for (i, side) in script.iter().cycle().take(200).enumerate() {
            player.step(*side, 4, 5);
            assert!((1..=4).contains(&player.row()), "step {}", i);
            assert!((1..=5).contains(&player.column()), "step {}", i);
            assert_eq!(player.orientation(), *side);
        }
    }
}
