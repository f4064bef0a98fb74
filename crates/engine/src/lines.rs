//! full-row sweep - bottom-up scan, re-examining each index after a clear

use gridfall_core::Grid;

/// Clear every full row, returning how many were removed.
///
/// Scans from the bottom row to the top. After a clear the same index is
/// examined again: it now holds what was the row above, which may itself be
/// full. Each iteration either clears a row or moves the scan up, so the
/// sweep terminates.
pub fn clear_full_rows(grid: &mut Grid) -> u32 {
    let mut cleared = 0;
    let mut scan = grid.rows();
    while scan > 0 {
        let y = scan - 1;
        if grid.is_row_full(y) {
            grid.clear_row(y);
            cleared += 1;
        } else {
            scan -= 1;
        }
    }
    cleared
}
