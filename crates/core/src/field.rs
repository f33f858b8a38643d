//! Field module - the fixed occupancy grid.
//!
//! The field is a 10x18 grid where each cell is either empty or permanently
//! occupied by a locked piece. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges
//! 0..17 (**bottom to top**; row 0 is the floor).

use arrayvec::ArrayVec;

use gridfall_types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Field width as an array dimension.
pub const FIELD_COLS: usize = FIELD_WIDTH as usize;

/// Field height as an array dimension.
pub const FIELD_ROWS: usize = FIELD_HEIGHT as usize;

/// Total number of cells on the field.
const FIELD_SIZE: usize = FIELD_COLS * FIELD_ROWS;

/// The play field - 10 columns x 18 rows using flat array storage.
///
/// Dimensions never change after construction. The grid is mutated only by
/// lock stamping and by the row-clear cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * FIELD_COLS + x).
    cells: [bool; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self {
            cells: [false; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH || y < 0 || y >= FIELD_HEIGHT {
            return None;
        }
        Some((y as usize) * FIELD_COLS + (x as usize))
    }

    /// Get width of the field.
    pub fn width(&self) -> i32 {
        FIELD_WIDTH
    }

    /// Get height of the field.
    pub fn height(&self) -> i32 {
        FIELD_HEIGHT
    }

    /// Get cell at (x, y). Returns `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if (x, y) is within bounds and occupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Permanently occupy the given absolute cells.
    ///
    /// Out-of-bounds cells are ignored; callers gate their coordinates
    /// before stamping.
    pub fn stamp_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        for (x, y) in cells {
            self.set(x, y, true);
        }
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_ROWS {
            return false;
        }
        let start = y * FIELD_COLS;
        self.cells[start..start + FIELD_COLS].iter().all(|&c| c)
    }

    /// Clear all full rows, cascading the rows above downward.
    ///
    /// Scans rows ascending from the floor. On a full row `y`, every row
    /// above shifts down by one and the top row empties; the scan then
    /// continues at `y + 1` without re-checking `y`. A row that becomes full
    /// again because of a shift is only caught by a later index of this pass
    /// or by the next frame's pass. Returns the indices at which clears
    /// happened (bottom to top).
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, FIELD_ROWS> {
        let mut cleared = ArrayVec::new();

        for y in 0..FIELD_ROWS {
            if !self.is_row_full(y) {
                continue;
            }

            // Shift rows y+1..top down by one, then empty the top row.
            self.cells.copy_within((y + 1) * FIELD_COLS.., y * FIELD_COLS);
            self.cells[(FIELD_ROWS - 1) * FIELD_COLS..].fill(false);

            cleared.push(y);
        }

        cleared
    }

    /// Copy the occupancy grid into `out`, indexed `[y][x]` with row 0 at
    /// the bottom.
    pub fn write_grid(&self, out: &mut [[bool; FIELD_COLS]; FIELD_ROWS]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * FIELD_COLS;
            row.copy_from_slice(&self.cells[start..start + FIELD_COLS]);
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(field: &mut Field, y: i32) {
        for x in 0..FIELD_WIDTH {
            field.set(x, y, true);
        }
    }

    #[test]
    fn test_index_calculation() {
        assert_eq!(Field::index(0, 0), Some(0));
        assert_eq!(Field::index(9, 0), Some(9));
        assert_eq!(Field::index(0, 1), Some(10));
        assert_eq!(Field::index(9, 17), Some(179));
        assert_eq!(Field::index(-1, 0), None);
        assert_eq!(Field::index(10, 0), None);
        assert_eq!(Field::index(0, 18), None);
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = Field::new();
        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                assert!(!field.is_occupied(x, y));
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut field = Field::new();

        assert!(field.set(0, 0, true));
        assert!(field.set(5, 10, true));

        assert_eq!(field.get(0, 0), Some(true));
        assert_eq!(field.get(5, 10), Some(true));
        assert_eq!(field.get(5, 11), Some(false));

        // Out of bounds is rejected, not clamped.
        assert!(!field.set(10, 0, true));
        assert_eq!(field.get(10, 0), None);
    }

    #[test]
    fn test_is_occupied_out_of_bounds() {
        let field = Field::new();
        assert!(!field.is_occupied(-1, 0));
        assert!(!field.is_occupied(0, -1));
        assert!(!field.is_occupied(FIELD_WIDTH, 0));
        assert!(!field.is_occupied(0, FIELD_HEIGHT));
    }

    #[test]
    fn test_row_full_detection() {
        let mut field = Field::new();
        assert!(!field.is_row_full(0));

        fill_row(&mut field, 0);
        assert!(field.is_row_full(0));

        field.set(4, 0, false);
        assert!(!field.is_row_full(0));

        // Out-of-range row index is never "full".
        assert!(!field.is_row_full(FIELD_ROWS));
    }

    #[test]
    fn test_clear_shifts_rows_down() {
        let mut field = Field::new();
        fill_row(&mut field, 0);
        field.set(3, 1, true);
        field.set(7, 2, true);

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0]);

        // Row 0 now holds prior row 1, row 1 holds prior row 2.
        assert!(field.is_occupied(3, 0));
        assert!(!field.is_occupied(7, 0));
        assert!(field.is_occupied(7, 1));
        assert!(!field.is_occupied(3, 1));
        assert!(!field.is_occupied(7, 2));
    }

    #[test]
    fn test_clear_leaves_rows_below_untouched() {
        let mut field = Field::new();
        field.set(2, 0, true);
        field.set(6, 1, true);
        fill_row(&mut field, 3);

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[3]);

        assert!(field.is_occupied(2, 0));
        assert!(field.is_occupied(6, 1));
    }

    #[test]
    fn test_clear_top_row_becomes_empty() {
        let mut field = Field::new();
        fill_row(&mut field, FIELD_HEIGHT - 1);

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[FIELD_ROWS - 1]);
        for x in 0..FIELD_WIDTH {
            assert!(!field.is_occupied(x, FIELD_HEIGHT - 1));
        }
    }

    #[test]
    fn test_stacked_full_rows_need_two_passes() {
        let mut field = Field::new();
        fill_row(&mut field, 0);
        fill_row(&mut field, 1);

        // The pass clears index 0 (shifting the other full row down into it)
        // and does not re-check index 0, so one full row survives the frame.
        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0]);
        assert!(field.is_row_full(0));
        assert!(!field.is_row_full(1));

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0]);
        assert!(!field.is_row_full(0));
    }

    #[test]
    fn test_separated_full_rows_clear_in_one_pass() {
        let mut field = Field::new();
        fill_row(&mut field, 0);
        field.set(4, 1, true);
        fill_row(&mut field, 2);

        // Clearing row 0 shifts the row-2 line down to index 1, which the
        // ascending scan reaches next.
        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0, 1]);
        assert!(!field.is_row_full(0));
        assert!(field.is_occupied(4, 0));
    }

    #[test]
    fn test_stamp_cells() {
        let mut field = Field::new();
        field.stamp_cells([(1, 2), (2, 2), (1, 3)]);

        assert!(field.is_occupied(1, 2));
        assert!(field.is_occupied(2, 2));
        assert!(field.is_occupied(1, 3));
        assert!(!field.is_occupied(2, 3));
    }

    #[test]
    fn test_write_grid() {
        let mut field = Field::new();
        field.set(0, 0, true);
        field.set(9, 17, true);

        let mut grid = [[false; FIELD_COLS]; FIELD_ROWS];
        field.write_grid(&mut grid);

        assert!(grid[0][0]);
        assert!(grid[17][9]);
        assert!(!grid[0][1]);
    }
}
