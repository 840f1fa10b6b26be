//! Board module - manages the tile grid
//!
//! The board is a `rows x columns` grid of tiles stored in a flat vector indexed
//! by tile id (row-major, so id == index). Coordinates passed in by callers are
//! 1-indexed: `(1, 1)` is the top-left tile.
//!
//! At most two tiles are "pending" (flipped face-up and waiting to be compared)
//! at any time. They are tracked in a stack-allocated [`ArrayVec`].

use arrayvec::ArrayVec;
use log::debug;

use crate::types::{Direction, PairKey, TileId};

/// A single tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    key: PairKey,
    flipped: bool,
    solved: bool,
    /// Revealed and rejected at least once.
    opened: bool,
    /// Orthogonal neighbours, indexed by [`Direction::index`].
    neighbours: [Option<TileId>; 4],
}

impl Tile {
    /// Create a face-down tile
    pub fn new(id: TileId, key: PairKey) -> Self {
        Self {
            id,
            key,
            flipped: false,
            solved: false,
            opened: false,
            neighbours: [None; 4],
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn key(&self) -> PairKey {
        self.key
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn neighbour(&self, side: Direction) -> Option<TileId> {
        self.neighbours[side.index()]
    }

    fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    fn set_solved(&mut self) {
        self.solved = true;
    }

    fn set_opened(&mut self) {
        self.opened = true;
    }

    fn add_neighbour(&mut self, tile_id: TileId, side: Direction) {
        self.neighbours[side.index()] = Some(tile_id);
    }
}

/// The tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    columns: u8,
    tiles: Vec<Tile>,
    flipped: ArrayVec<TileId, 2>,
    unsolved_count: u16,
}

impl Board {
    /// Create an empty board; tiles are added with [`Board::add_tile`].
    pub fn new(rows: u8, columns: u8) -> Self {
        let len = rows as usize * columns as usize;
        Self {
            rows,
            columns,
            tiles: Vec::with_capacity(len),
            flipped: ArrayVec::new(),
            unsolved_count: len as u16,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Number of tiles currently on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Add the next tile in row-major order.
    ///
    /// Tile ids must be dense: the id has to equal the number of tiles
    /// already on the board.
    pub fn add_tile(&mut self, tile: Tile) {
        debug_assert_eq!(tile.id as usize, self.tiles.len());
        self.tiles.push(tile);
    }

    /// Wire every tile to its left/up/right/down neighbours
    pub fn connect_all_tiles(&mut self) {
        for row in 1..=self.rows {
            for column in 1..=self.columns {
                let Some(tile_id) = self.tile_id_at(row, column) else {
                    continue;
                };
                if let Some(left) = self.tile_id_at(row, column - 1) {
                    self.connect_tiles(left, tile_id, Direction::Right);
                }
                if let Some(top) = self.tile_id_at(row - 1, column) {
                    self.connect_tiles(top, tile_id, Direction::Down);
                }
            }
        }
    }

    fn connect_tiles(&mut self, parent: TileId, child: TileId, side: Direction) {
        self.tiles[parent as usize].add_neighbour(child, side);
        self.tiles[child as usize].add_neighbour(parent, side.opposite());
    }

    /// Tile id at a 1-indexed cell, or `None` if the cell is off the board
    pub fn tile_id_at(&self, row: u8, column: u8) -> Option<TileId> {
        if row < 1 || column < 1 || row > self.rows || column > self.columns {
            return None;
        }
        let id = (row as usize - 1) * self.columns as usize + (column as usize - 1);
        if id >= self.tiles.len() {
            return None;
        }
        Some(id as TileId)
    }

    /// Tile at a 1-indexed cell
    pub fn tile_at(&self, row: u8, column: u8) -> Option<&Tile> {
        self.tile_id_at(row, column).map(|id| &self.tiles[id as usize])
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id as usize)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// 1-indexed `(row, column)` of a tile id
    pub fn position_of(&self, id: TileId) -> Option<(u8, u8)> {
        if id as usize >= self.tiles.len() || self.columns == 0 {
            return None;
        }
        let columns = self.columns as u16;
        Some(((id / columns) as u8 + 1, (id % columns) as u8 + 1))
    }

    /// Neighbour of a tile on the given side
    pub fn neighbour(&self, id: TileId, side: Direction) -> Option<TileId> {
        self.tile(id).and_then(|tile| tile.neighbour(side))
    }

    /// Flip the tile at a cell face-up and add it to the pending pair.
    ///
    /// Callers check [`Board::cannot_flip`] first. Returns `None` (and changes
    /// nothing) for off-board cells or when two tiles are already pending.
    pub fn flip_tile(&mut self, row: u8, column: u8) -> Option<TileId> {
        let id = self.tile_id_at(row, column)?;
        if self.flipped.is_full() {
            return None;
        }
        self.tiles[id as usize].flip();
        self.flipped.push(id);
        debug!("flipped tile {} at ({}, {})", id, row, column);
        Some(id)
    }

    /// True if the tile at a cell is already face-up (or the cell is off the board)
    pub fn cannot_flip(&self, row: u8, column: u8) -> bool {
        self.tile_at(row, column)
            .map(|tile| tile.is_flipped())
            .unwrap_or(true)
    }

    pub fn has_two_flipped(&self) -> bool {
        self.flipped.len() == 2
    }

    /// Ids of the pending (face-up, unresolved) tiles, in flip order
    pub fn flipped_ids(&self) -> &[TileId] {
        &self.flipped
    }

    fn pending_pair(&self) -> Option<(usize, usize)> {
        match self.flipped.as_slice() {
            [first, second] => Some((*first as usize, *second as usize)),
            _ => None,
        }
    }

    /// Compare the two pending tiles.
    ///
    /// Match: both become solved and the unsolved count drops by two.
    /// Mismatch: both are flipped back face-down. Returns whether a pair was
    /// found. Does nothing unless exactly two tiles are pending.
    pub fn resolve_flipped_pair(&mut self) -> bool {
        let Some((first, second)) = self.pending_pair() else {
            return false;
        };

        if self.tiles[first].key != self.tiles[second].key {
            self.tiles[first].flip();
            self.tiles[second].flip();
            debug!("tiles {} and {} do not match", first, second);
            return false;
        }

        self.tiles[first].set_solved();
        self.tiles[second].set_solved();
        self.unsolved_count = self.unsolved_count.saturating_sub(2);
        debug!(
            "tiles {} and {} matched, {} left",
            first, second, self.unsolved_count
        );
        true
    }

    /// Forget the pending pair (after every resolution)
    pub fn clear_flipped(&mut self) {
        self.flipped.clear();
    }

    /// Mark both pending tiles as opened
    pub fn mark_flipped_opened(&mut self) {
        for &id in &self.flipped {
            self.tiles[id as usize].set_opened();
        }
    }

    /// True if either pending tile was opened in an earlier round
    pub fn any_flipped_opened(&self) -> bool {
        self.flipped
            .iter()
            .any(|&id| self.tiles[id as usize].is_opened())
    }

    pub fn unsolved_count(&self) -> u16 {
        self.unsolved_count
    }

    pub fn is_solved(&self) -> bool {
        self.unsolved_count == 0
    }
}
