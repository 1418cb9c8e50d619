/// Placement grid types for the home designer.

use serde::Serialize;

use super::state::FurnitureDef;

/// The room is a fixed GRID_SIZE × GRID_SIZE board.
pub const GRID_SIZE: usize = 6;

/// What's in a grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    Empty,
    /// Top-left cell of a placed item.
    Origin(&'static FurnitureDef),
    /// Part of a multi-cell item; the item itself lives at the origin cell.
    Covered { origin_x: usize, origin_y: usize },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A placed item as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub item_id: &'static str,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// 2D grid indexed `[y][x]`.
pub type Board = [[Cell; GRID_SIZE]; GRID_SIZE];

pub fn empty_board() -> Board {
    [[Cell::Empty; GRID_SIZE]; GRID_SIZE]
}

pub fn in_bounds(x: usize, y: usize) -> bool {
    x < GRID_SIZE && y < GRID_SIZE
}

/// Whether a `width × height` footprint anchored at `(x, y)` fits the board.
pub fn footprint_fits(x: usize, y: usize, width: usize, height: usize) -> bool {
    in_bounds(x, y) && x + width <= GRID_SIZE && y + height <= GRID_SIZE
}

/// Iterate every cell of a footprint, row by row.
pub fn footprint(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (y..y + height).flat_map(move |cy| (x..x + width).map(move |cx| (cx, cy)))
}

/// Given any cell coordinate, return the origin of the item covering it.
/// Returns None for empty or out-of-bounds cells.
pub fn anchor_of(board: &Board, x: usize, y: usize) -> Option<(usize, usize)> {
    if !in_bounds(x, y) {
        return None;
    }
    match board[y][x] {
        Cell::Empty => None,
        Cell::Origin(_) => Some((x, y)),
        Cell::Covered { origin_x, origin_y } => Some((origin_x, origin_y)),
    }
}

/// Item placed at the given origin.
pub fn item_at(board: &Board, ox: usize, oy: usize) -> Option<&'static FurnitureDef> {
    match board.get(oy)?.get(ox)? {
        Cell::Origin(def) => Some(def),
        _ => None,
    }
}

/// All placements in row-major order of their origins.
pub fn placements(board: &Board) -> Vec<Placement> {
    let mut out = Vec::new();
    for (y, row) in board.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Cell::Origin(def) = cell {
                out.push(Placement {
                    item_id: def.id,
                    x,
                    y,
                    width: def.width,
                    height: def.height,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_cells_row_major() {
        let cells: Vec<_> = footprint(1, 2, 2, 2).collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn fits_at_edges() {
        assert!(footprint_fits(4, 4, 2, 2));
        assert!(!footprint_fits(5, 4, 2, 2));
        assert!(!footprint_fits(4, 5, 2, 2));
        assert!(footprint_fits(5, 5, 1, 1));
        assert!(!footprint_fits(6, 0, 1, 1));
    }

    #[test]
    fn anchor_of_empty_and_outside() {
        let board = empty_board();
        assert_eq!(anchor_of(&board, 0, 0), None);
        assert_eq!(anchor_of(&board, 6, 0), None);
    }

    #[test]
    fn anchor_of_covered_points_at_origin() {
        let mut board = empty_board();
        board[1][2] = Cell::Covered {
            origin_x: 1,
            origin_y: 1,
        };
        assert_eq!(anchor_of(&board, 2, 1), Some((1, 1)));
    }
}
