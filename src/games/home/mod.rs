/// Home designer: buy furniture and lay it out on a 6×6 room grid.

pub mod grid;
pub mod logic;
pub mod state;

pub use grid::{Placement, GRID_SIZE};
pub use state::{FurnitureDef, HomeState, FURNITURE};
