use serde::Serialize;

pub const ROW_LEN: usize = 5;
pub const ROWS: usize = 3;
pub const CARD_CELLS: usize = ROWS * ROW_LEN;

/// Rows of `cells` in storage order; the last one is short when the cell
/// count is not a multiple of five.
pub fn card_rows(cells: &[i32]) -> std::slice::Chunks<'_, i32> {
    cells.chunks(ROW_LEN)
}

/// A pre-printed card: 15 numbers in print order, 3 rows of 5.
///
/// Stored cells are not re-validated here. A wrong cell count is an
/// ingestion data-quality issue and scoring tolerates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLayout {
    pub id: i64,
    pub name: String,
    pub version: String,
    pub cells: Vec<i32>,
}

impl CardLayout {
    pub fn rows(&self) -> std::slice::Chunks<'_, i32> {
        card_rows(&self.cells)
    }

    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == CARD_CELLS
    }
}
