//! Piece catalog - canonical shape matrices and rotation.
//!
//! Each of the seven kinds is defined once as an immutable bounding-square
//! template; rotation produces a new matrix and never edits a template.
//! Local coordinates are `(row, col)` within the bounding square; locking
//! maps a filled local cell `(m, n)` to the absolute field cell
//! `(x + n, floor(y) + m)`, so local row 0 sits at the bottom of the box.

use gridfall_types::PieceKind;

/// Largest bounding box among the seven kinds (the I piece).
pub const MAX_PIECE_SIZE: usize = 4;

/// A `size x size` boolean shape matrix in a fixed backing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMatrix {
    size: usize,
    cells: [[bool; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl PieceMatrix {
    fn from_cells(size: usize, filled: &[(usize, usize)]) -> Self {
        debug_assert!(size <= MAX_PIECE_SIZE);
        let mut cells = [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for &(row, col) in filled {
            cells[row][col] = true;
        }
        Self { size, cells }
    }

    /// Bounding box edge length (2, 3 or 4).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether the local cell `(row, col)` is filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row][col]
    }

    /// Rotate 90 degrees: `new[size-1-n][m] = old[m][n]`.
    ///
    /// Pure; performs no bounds or collision validation against the field
    /// (matching the original game).
    pub fn rotated(&self) -> Self {
        let mut out = Self {
            size: self.size,
            cells: [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
        };
        for m in 0..self.size {
            for n in 0..self.size {
                out.cells[self.size - 1 - n][m] = self.cells[m][n];
            }
        }
        out
    }

    /// Iterate the filled local cells as `(row, col)` pairs.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        let cells = self.cells;
        (0..size).flat_map(move |m| (0..size).filter(move |&n| cells[m][n]).map(move |n| (m, n)))
    }
}

/// Get the canonical template matrix for a piece kind.
///
/// The exact cell patterns are load-bearing for visual correctness and are
/// preserved bit-for-bit from the original game.
pub fn matrix(kind: PieceKind) -> PieceMatrix {
    match kind {
        // 2x2 block, all four cells.
        PieceKind::O => PieceMatrix::from_cells(2, &[(0, 0), (0, 1), (1, 0), (1, 1)]),
        // 4x4 line, column 1 through all rows.
        PieceKind::I => PieceMatrix::from_cells(4, &[(0, 1), (1, 1), (2, 1), (3, 1)]),
        // Row 1 full plus one corner cell each for the L/J mirror pair.
        PieceKind::J => PieceMatrix::from_cells(3, &[(1, 0), (1, 1), (1, 2), (2, 0)]),
        PieceKind::L => PieceMatrix::from_cells(3, &[(1, 0), (1, 1), (1, 2), (0, 0)]),
        // S/Z mirror pair.
        PieceKind::S => PieceMatrix::from_cells(3, &[(0, 0), (1, 0), (1, 1), (2, 1)]),
        PieceKind::Z => PieceMatrix::from_cells(3, &[(1, 0), (1, 1), (0, 1), (2, 0)]),
        // Row 1 full plus the stem.
        PieceKind::T => PieceMatrix::from_cells(3, &[(1, 0), (1, 1), (1, 2), (2, 1)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_set(m: &PieceMatrix) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = m.filled_cells().collect();
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_sizes_per_kind() {
        assert_eq!(matrix(PieceKind::O).size(), 2);
        assert_eq!(matrix(PieceKind::I).size(), 4);
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::T,
        ] {
            assert_eq!(matrix(kind).size(), 3);
        }
    }

    #[test]
    fn test_every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(matrix(kind).filled_cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_canonical_patterns() {
        assert_eq!(
            filled_set(&matrix(PieceKind::O)),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(
            filled_set(&matrix(PieceKind::I)),
            vec![(0, 1), (1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(
            filled_set(&matrix(PieceKind::J)),
            vec![(1, 0), (1, 1), (1, 2), (2, 0)]
        );
        assert_eq!(
            filled_set(&matrix(PieceKind::L)),
            vec![(0, 0), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(
            filled_set(&matrix(PieceKind::S)),
            vec![(0, 0), (1, 0), (1, 1), (2, 1)]
        );
        assert_eq!(
            filled_set(&matrix(PieceKind::Z)),
            vec![(0, 1), (1, 0), (1, 1), (2, 0)]
        );
        assert_eq!(
            filled_set(&matrix(PieceKind::T)),
            vec![(1, 0), (1, 1), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn test_rotation_moves_cells_by_formula() {
        // T: (m, n) -> (size-1-n, m).
        let rotated = matrix(PieceKind::T).rotated();
        assert_eq!(
            filled_set(&rotated),
            vec![(0, 1), (1, 1), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn test_rotation_is_order_four() {
        for kind in PieceKind::ALL {
            let original = matrix(kind);
            let back = original.rotated().rotated().rotated().rotated();
            assert_eq!(original, back, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_does_not_touch_template() {
        let template = matrix(PieceKind::S);
        let _ = template.rotated();
        assert_eq!(template, matrix(PieceKind::S));
    }

    #[test]
    fn test_is_filled_outside_size_is_false() {
        let o = matrix(PieceKind::O);
        assert!(!o.is_filled(2, 0));
        assert!(!o.is_filled(0, 3));
    }
}
