//! Home designer logic: buying furniture and arranging it on the grid.

use super::grid::{anchor_of, footprint, footprint_fits, in_bounds, item_at, Cell};
use super::state::{find_furniture, HomeState};
use crate::economy::{Effect, Player};
use crate::error::{Outcome, Rejection};

/// Buy an item into the inventory.
pub fn purchase(home: &mut HomeState, player: &Player, id: &str) -> Outcome {
    let item = find_furniture(id).ok_or(Rejection::UnknownId)?;
    if home.owns(item.id) {
        return Err(Rejection::AlreadyOwned);
    }
    if !player.can_afford(item.price) {
        return Err(Rejection::InsufficientFunds);
    }
    home.inventory.insert(item.id);
    Ok(Effect::debit(item.price))
}

/// Place an owned item with its top-left corner at `(x, y)`.
///
/// The whole `width × height` rectangle must be inside the grid and every
/// cell of it must be empty.
pub fn place(home: &mut HomeState, id: &str, x: usize, y: usize) -> Outcome {
    let item = find_furniture(id).ok_or(Rejection::UnknownId)?;
    if !home.owns(item.id) {
        return Err(Rejection::NotOwned);
    }
    if !footprint_fits(x, y, item.width, item.height) {
        return Err(Rejection::OutOfBounds);
    }
    if footprint(x, y, item.width, item.height).any(|(cx, cy)| !home.board[cy][cx].is_empty()) {
        return Err(Rejection::CellOccupied);
    }
    for (cx, cy) in footprint(x, y, item.width, item.height) {
        home.board[cy][cx] = Cell::Covered {
            origin_x: x,
            origin_y: y,
        };
    }
    home.board[y][x] = Cell::Origin(item);
    Ok(Effect::none())
}

/// Remove the item covering `(x, y)`. A non-origin cell resolves to its
/// item's origin first, so the whole footprint is always cleared.
pub fn remove(home: &mut HomeState, x: usize, y: usize) -> Outcome {
    if !in_bounds(x, y) {
        return Err(Rejection::OutOfBounds);
    }
    let (ox, oy) = anchor_of(&home.board, x, y).ok_or(Rejection::EmptyCell)?;
    let item = item_at(&home.board, ox, oy).ok_or(Rejection::EmptyCell)?;
    for (cx, cy) in footprint(ox, oy, item.width, item.height) {
        home.board[cy][cx] = Cell::Empty;
    }
    Ok(Effect::none())
}

/// Place `id` at `(x, y)`, first clearing whichever item covers that origin
/// cell. If the new item still does not fit, the cleared item is restored and
/// the board is left as it was.
pub fn replace_at(home: &mut HomeState, id: &str, x: usize, y: usize) -> Outcome {
    let before = home.board;
    if anchor_of(&home.board, x, y).is_some() {
        remove(home, x, y)?;
    }
    place(home, id, x, y).map_err(|reason| {
        home.board = before;
        reason
    })
}

/// A tap on the room grid: an occupied cell removes its item, an empty cell
/// receives the selected item (if any).
pub fn click_cell(home: &mut HomeState, selected: Option<&str>, x: usize, y: usize) -> Outcome {
    if anchor_of(&home.board, x, y).is_some() {
        return remove(home, x, y);
    }
    match selected {
        Some(id) => place(home, id, x, y),
        None if in_bounds(x, y) => Err(Rejection::EmptyCell),
        None => Err(Rejection::OutOfBounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::home::grid::{placements, GRID_SIZE};

    fn home_owning(ids: &[&str]) -> HomeState {
        let mut home = HomeState::new();
        for id in ids {
            home.inventory.insert(find_furniture(id).unwrap().id);
        }
        home
    }

    #[test]
    fn purchase_debits_and_records() {
        let mut home = HomeState::new();
        let player = Player::new(10_000);
        assert_eq!(purchase(&mut home, &player, "desk_wood"), Ok(Effect::debit(5_000)));
        assert!(home.owns("desk_wood"));
    }

    #[test]
    fn purchase_twice_rejected() {
        let mut home = home_owning(&["desk_wood"]);
        let player = Player::new(1_000_000);
        assert_eq!(purchase(&mut home, &player, "desk_wood"), Err(Rejection::AlreadyOwned));
        assert_eq!(home.inventory.len(), 1);
    }

    #[test]
    fn purchase_unaffordable_rejected() {
        let mut home = HomeState::new();
        let player = Player::new(10_000);
        assert_eq!(purchase(&mut home, &player, "gaming_pc"), Err(Rejection::InsufficientFunds));
        assert!(home.inventory.is_empty());
    }

    #[test]
    fn place_requires_ownership() {
        let mut home = HomeState::new();
        assert_eq!(place(&mut home, "chair_basic", 0, 0), Err(Rejection::NotOwned));
        assert_eq!(place(&mut home, "throne", 0, 0), Err(Rejection::UnknownId));
    }

    #[test]
    fn place_multi_cell_covers_footprint() {
        let mut home = home_owning(&["bed_king"]);
        place(&mut home, "bed_king", 2, 3).unwrap();
        assert_eq!(home.covered_cells(), 4);
        assert!(matches!(home.board[3][2], Cell::Origin(_)));
        assert_eq!(
            home.board[4][3],
            Cell::Covered {
                origin_x: 2,
                origin_y: 3
            }
        );
    }

    #[test]
    fn place_past_edge_rejected() {
        let mut home = home_owning(&["bed_king"]);
        assert_eq!(place(&mut home, "bed_king", 5, 0), Err(Rejection::OutOfBounds));
        assert_eq!(place(&mut home, "bed_king", 0, 5), Err(Rejection::OutOfBounds));
        assert_eq!(place(&mut home, "bed_king", 9, 9), Err(Rejection::OutOfBounds));
        assert_eq!(home.covered_cells(), 0);
    }

    #[test]
    fn overlap_checks_whole_rectangle() {
        let mut home = home_owning(&["bookshelf", "desk_wood"]);
        place(&mut home, "bookshelf", 1, 1).unwrap(); // covers (1,1),(1,2)
        // desk at (0,2) would cover (0,2),(1,2): origin free, second cell taken
        assert_eq!(place(&mut home, "desk_wood", 0, 2), Err(Rejection::CellOccupied));
        assert_eq!(place(&mut home, "desk_wood", 0, 3), Ok(Effect::none()));
    }

    #[test]
    fn remove_via_covered_cell_clears_item() {
        let mut home = home_owning(&["bed_king", "chair_basic"]);
        place(&mut home, "bed_king", 0, 0).unwrap();
        place(&mut home, "chair_basic", 3, 3).unwrap();
        remove(&mut home, 1, 1).unwrap();
        let left = placements(&home.board);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].item_id, "chair_basic");
        assert_eq!(home.covered_cells(), 1);
    }

    #[test]
    fn remove_empty_or_outside() {
        let mut home = HomeState::new();
        assert_eq!(remove(&mut home, 0, 0), Err(Rejection::EmptyCell));
        assert_eq!(remove(&mut home, GRID_SIZE, 0), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn replace_swaps_item_at_origin() {
        let mut home = home_owning(&["chair_basic", "lamp_floor"]);
        place(&mut home, "chair_basic", 2, 2).unwrap();
        replace_at(&mut home, "lamp_floor", 2, 2).unwrap();
        let all = placements(&home.board);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].item_id, "lamp_floor");
    }

    #[test]
    fn failed_replace_restores_board() {
        let mut home = home_owning(&["chair_basic", "bed_king", "plant_pot"]);
        place(&mut home, "chair_basic", 5, 5).unwrap();
        place(&mut home, "plant_pot", 4, 4).unwrap();
        let before = home.board;
        // bed at (5,5) would leave the grid
        assert_eq!(replace_at(&mut home, "bed_king", 5, 5), Err(Rejection::OutOfBounds));
        assert_eq!(home.board, before);
    }

    #[test]
    fn click_cell_toggles() {
        let mut home = home_owning(&["sofa_leather"]);
        click_cell(&mut home, Some("sofa_leather"), 0, 0).unwrap();
        assert_eq!(home.covered_cells(), 2);
        // click the right half: routes to the origin and removes the sofa
        click_cell(&mut home, None, 1, 0).unwrap();
        assert_eq!(home.covered_cells(), 0);
        assert_eq!(click_cell(&mut home, None, 1, 0), Err(Rejection::EmptyCell));
    }
}
