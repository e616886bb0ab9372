use super::CategoryFilter;
use crate::model::Item;

/// One entry of a rendered item grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSlot {
    /// `div.clear` separator.
    RowBreak,
    /// Index into the unfiltered item slice.
    Tile(usize),
}

/// Lays out the tiles of `items` that pass `filter`.
///
/// A row break precedes every item whose position in the *unfiltered* list is a
/// multiple of `row_length` (1-based), and one closes the grid. Filtering never
/// renumbers items, so a filtered grid may break early or not at all.
pub fn layout_tiles(items: &[Item], filter: &CategoryFilter, row_length: usize) -> Vec<TileSlot> {
    let mut slots = Vec::with_capacity(items.len() + items.len() / row_length.max(1) + 1);
    for (i, item) in items.iter().enumerate() {
        if !filter.admits(item) {
            continue;
        }
        if row_length != 0 && (i + 1) % row_length == 0 {
            slots.push(TileSlot::RowBreak);
        }
        slots.push(TileSlot::Tile(i));
    }
    slots.push(TileSlot::RowBreak);
    slots
}
