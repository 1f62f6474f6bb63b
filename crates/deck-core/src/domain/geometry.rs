//! Corner placement math for navigation buttons.
//!
//! Given a device grid and the configured corners, this module decides which
//! cells the prev/next pair and the folder-up button occupy. The math is pure
//! and infallible: on grids too narrow to host every button, the colliding
//! button is simply absent from the returned placement and the packer records
//! a diagnostic when it actually needs the missing slot.

use serde::{Deserialize, Serialize};

use crate::domain::device::DeviceGrid;

/// A zero-indexed grid cell, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    /// Renders the cell as the coordinate key used throughout the bundle.
    pub fn key(&self) -> String {
        format!("{},{}", self.col, self.row)
    }
}

/// One of the four grid corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The cell at this corner of the grid.
    pub fn cell(&self, grid: DeviceGrid) -> Cell {
        let col = if self.is_right() { grid.cols - 1 } else { 0 };
        let row = if self.is_bottom() { grid.rows - 1 } else { 0 };
        Cell { col, row }
    }

    /// The diagonally opposite corner.
    pub fn opposite(&self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }
}

/// The three reservable navigation slots, in ascending placement priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSlot {
    Prev,
    Next,
    FolderUp,
}

impl std::fmt::Display for NavSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavSlot::Prev => write!(f, "prev"),
            NavSlot::Next => write!(f, "next"),
            NavSlot::FolderUp => write!(f, "folder-up"),
        }
    }
}

/// Resolved cells for the navigation buttons on one device grid.
///
/// `prev` or `next` is `None` only when the grid is too narrow to host it
/// (one-column devices, or a folder-up collision that cannot be shifted
/// away). `folder_up` always has a cell: it wins every collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPlacement {
    pub prev: Option<Cell>,
    pub next: Option<Cell>,
    pub folder_up: Cell,
}

impl NavPlacement {
    /// The cell assigned to a slot, if the grid could host it.
    pub fn cell(&self, slot: NavSlot) -> Option<Cell> {
        match slot {
            NavSlot::Prev => self.prev,
            NavSlot::Next => self.next,
            NavSlot::FolderUp => Some(self.folder_up),
        }
    }
}

/// Computes navigation button cells for a grid.
///
/// The prev/next pair sits side by side on the edge row of `nav_corner`:
/// against the right edge with `next` outermost, or against the left edge
/// with `prev` outermost. `prev` is always the left member of the pair.
///
/// `folder_up` takes `up_corner`, defaulting to the corner diagonally
/// opposite the nav pair.
///
/// Collision rule: when folder-up lands on a pair member's cell, the pair
/// shifts one column toward the grid center. If the shift would push a
/// member off the grid, the colliding member is dropped instead; folder-up
/// keeps its corner unconditionally.
pub fn nav_cells(grid: DeviceGrid, nav_corner: Corner, up_corner: Option<Corner>) -> NavPlacement {
    let row = if nav_corner.is_bottom() { grid.rows - 1 } else { 0 };

    // Pair columns before collision resolution. One-column grids can only
    // host a single button; next outranks prev.
    let (mut prev, mut next) = if grid.cols >= 2 {
        if nav_corner.is_right() {
            (
                Some(Cell { col: grid.cols - 2, row }),
                Some(Cell { col: grid.cols - 1, row }),
            )
        } else {
            (Some(Cell { col: 0, row }), Some(Cell { col: 1, row }))
        }
    } else {
        (None, Some(Cell { col: 0, row }))
    };

    let folder_up = up_corner.unwrap_or_else(|| nav_corner.opposite()).cell(grid);

    let collides = |c: Option<Cell>| c == Some(folder_up);
    if collides(prev) || collides(next) {
        // Shift inward, away from the configured side.
        let delta: i64 = if nav_corner.is_right() { -1 } else { 1 };
        let shifted = |c: Option<Cell>| -> Option<Cell> {
            let cell = c?;
            let col = cell.col as i64 + delta;
            (0..grid.cols as i64).contains(&col).then(|| Cell { col: col as u32, row })
        };
        if let (Some(p), Some(n)) = (shifted(prev), shifted(next)) {
            prev = Some(p);
            next = Some(n);
        } else {
            // Shift impossible: drop whichever member sits on folder-up.
            if collides(prev) {
                prev = None;
            }
            if collides(next) {
                next = None;
            }
        }
    }

    NavPlacement { prev, next, folder_up }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cols: u32, rows: u32) -> DeviceGrid {
        DeviceGrid { cols, rows }
    }

    // ── Corner cells ──────────────────────────────────────────────────────────

    #[test]
    fn test_corner_cells_on_standard_grid() {
        let g = grid(5, 3);
        assert_eq!(Corner::TopLeft.cell(g), Cell { col: 0, row: 0 });
        assert_eq!(Corner::TopRight.cell(g), Cell { col: 4, row: 0 });
        assert_eq!(Corner::BottomLeft.cell(g), Cell { col: 0, row: 2 });
        assert_eq!(Corner::BottomRight.cell(g), Cell { col: 4, row: 2 });
    }

    #[test]
    fn test_corner_opposite_is_diagonal() {
        assert_eq!(Corner::BottomRight.opposite(), Corner::TopLeft);
        assert_eq!(Corner::TopRight.opposite(), Corner::BottomLeft);
    }

    // ── Pair placement ────────────────────────────────────────────────────────

    #[test]
    fn test_nav_cells_bottom_right_places_next_in_corner() {
        let p = nav_cells(grid(5, 3), Corner::BottomRight, None);
        assert_eq!(p.prev, Some(Cell { col: 3, row: 2 }));
        assert_eq!(p.next, Some(Cell { col: 4, row: 2 }));
        assert_eq!(p.folder_up, Cell { col: 0, row: 0 });
    }

    #[test]
    fn test_nav_cells_bottom_left_places_prev_in_corner() {
        let p = nav_cells(grid(5, 3), Corner::BottomLeft, None);
        assert_eq!(p.prev, Some(Cell { col: 0, row: 2 }));
        assert_eq!(p.next, Some(Cell { col: 1, row: 2 }));
        assert_eq!(p.folder_up, Cell { col: 4, row: 0 });
    }

    #[test]
    fn test_nav_cells_top_right_uses_row_zero() {
        let p = nav_cells(grid(4, 2), Corner::TopRight, None);
        assert_eq!(p.prev, Some(Cell { col: 2, row: 0 }));
        assert_eq!(p.next, Some(Cell { col: 3, row: 0 }));
        assert_eq!(p.folder_up, Cell { col: 0, row: 1 });
    }

    // ── Collision resolution ──────────────────────────────────────────────────

    #[test]
    fn test_nav_cells_collision_shifts_pair_inward() {
        // Folder-up configured onto the nav corner: the pair must slide left
        // and nothing may be silently lost.
        let p = nav_cells(grid(4, 2), Corner::BottomRight, Some(Corner::BottomRight));
        assert_eq!(p.folder_up, Cell { col: 3, row: 1 });
        assert_eq!(p.prev, Some(Cell { col: 1, row: 1 }));
        assert_eq!(p.next, Some(Cell { col: 2, row: 1 }));
    }

    #[test]
    fn test_nav_cells_collision_shift_left_corner() {
        let p = nav_cells(grid(4, 2), Corner::BottomLeft, Some(Corner::BottomLeft));
        assert_eq!(p.folder_up, Cell { col: 0, row: 1 });
        assert_eq!(p.prev, Some(Cell { col: 1, row: 1 }));
        assert_eq!(p.next, Some(Cell { col: 2, row: 1 }));
    }

    #[test]
    fn test_nav_cells_unshiftable_collision_drops_next() {
        // Two columns: shifting the pair left would leave the grid, so the
        // member under folder-up is dropped and prev survives.
        let p = nav_cells(grid(2, 2), Corner::BottomRight, Some(Corner::BottomRight));
        assert_eq!(p.folder_up, Cell { col: 1, row: 1 });
        assert_eq!(p.next, None);
        assert_eq!(p.prev, Some(Cell { col: 0, row: 1 }));
    }

    #[test]
    fn test_nav_cells_unshiftable_collision_drops_prev() {
        // Folder-up on the inner pair member of a two-column grid.
        let p = nav_cells(grid(2, 2), Corner::BottomRight, Some(Corner::BottomLeft));
        assert_eq!(p.folder_up, Cell { col: 0, row: 1 });
        assert_eq!(p.prev, None);
        assert_eq!(p.next, Some(Cell { col: 1, row: 1 }));
    }

    // ── Degenerate grids ──────────────────────────────────────────────────────

    #[test]
    fn test_nav_cells_single_column_keeps_only_next() {
        let p = nav_cells(grid(1, 4), Corner::BottomRight, None);
        assert_eq!(p.prev, None);
        assert_eq!(p.next, Some(Cell { col: 0, row: 3 }));
        assert_eq!(p.folder_up, Cell { col: 0, row: 0 });
    }

    #[test]
    fn test_nav_cells_single_cell_folder_up_wins_everything() {
        let p = nav_cells(grid(1, 1), Corner::BottomRight, None);
        assert_eq!(p.folder_up, Cell { col: 0, row: 0 });
        assert_eq!(p.prev, None);
        assert_eq!(p.next, None);
    }

    #[test]
    fn test_nav_cells_single_row_distinct_corners_do_not_collide() {
        let p = nav_cells(grid(3, 1), Corner::BottomRight, None);
        // Opposite corner collapses onto row 0 but column 0 stays free of the pair.
        assert_eq!(p.folder_up, Cell { col: 0, row: 0 });
        assert_eq!(p.prev, Some(Cell { col: 1, row: 0 }));
        assert_eq!(p.next, Some(Cell { col: 2, row: 0 }));
    }
}
