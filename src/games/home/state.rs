/// Furniture catalog and the player's home.

use std::collections::BTreeSet;

use serde::Serialize;

use super::grid::{empty_board, Board, Cell, GRID_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Living,
    Electronics,
    Decoration,
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FurnitureDef {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u64,
    pub category: Category,
    /// Footprint in grid cells.
    pub width: usize,
    pub height: usize,
}

pub static FURNITURE: [FurnitureDef; 10] = [
    FurnitureDef {
        id: "chair_basic",
        name: "Office Chair",
        price: 2_500,
        category: Category::Living,
        width: 1,
        height: 1,
    },
    FurnitureDef {
        id: "desk_wood",
        name: "Wooden Desk",
        price: 5_000,
        category: Category::Living,
        width: 2,
        height: 1,
    },
    FurnitureDef {
        id: "plant_pot",
        name: "House Plant",
        price: 1_500,
        category: Category::Decoration,
        width: 1,
        height: 1,
    },
    FurnitureDef {
        id: "bookshelf",
        name: "Bookshelf",
        price: 4_000,
        category: Category::Decoration,
        width: 1,
        height: 2,
    },
    FurnitureDef {
        id: "tv_4k",
        name: "55\" 4K TV",
        price: 45_000,
        category: Category::Electronics,
        width: 2,
        height: 1,
    },
    FurnitureDef {
        id: "gaming_pc",
        name: "Gaming PC (RTX 4080)",
        price: 250_000,
        category: Category::Electronics,
        width: 1,
        height: 1,
    },
    FurnitureDef {
        id: "sofa_leather",
        name: "Leather Sofa",
        price: 60_000,
        category: Category::Living,
        width: 2,
        height: 1,
    },
    FurnitureDef {
        id: "bed_king",
        name: "King Size Bed",
        price: 80_000,
        category: Category::Living,
        width: 2,
        height: 2,
    },
    FurnitureDef {
        id: "server_rack",
        name: "Home Server",
        price: 150_000,
        category: Category::Electronics,
        width: 1,
        height: 2,
    },
    FurnitureDef {
        id: "lamp_floor",
        name: "Loft Floor Lamp",
        price: 8_000,
        category: Category::Decoration,
        width: 1,
        height: 1,
    },
];

pub fn find_furniture(id: &str) -> Option<&'static FurnitureDef> {
    FURNITURE.iter().find(|f| f.id == id)
}

/// Owned furniture plus the room grid.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeState {
    /// Ids of purchased items. Each item can be bought once.
    pub inventory: BTreeSet<&'static str>,
    pub board: Board,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            inventory: BTreeSet::new(),
            board: empty_board(),
        }
    }

    pub fn owns(&self, id: &str) -> bool {
        self.inventory.contains(id)
    }

    /// Number of cells covered by any placement.
    pub fn covered_cells(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count()
    }

    pub fn free_cells(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.covered_cells()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.board.get(y)?.get(x).copied()
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
