// step.rs - One generation of the automaton, row by row

use crate::GridSize;

/// Compute the next generation of `src` into `dst`.
///
/// Each cell sums the 3x3 window centred on itself, self included, with
/// wrap-around on both axes. A cell is alive next generation when that sum is
/// exactly 3, or when it is 4 and the cell is alive now. This is the standard
/// B3/S23 rule counted self-inclusively.
///
/// # Panics
///
/// If either buffer length differs from `size.area()`.
pub fn step(dst: &mut [u8], src: &[u8], size: GridSize) {
    assert_eq!(src.len(), size.area(), "source grid has wrong length");
    assert_eq!(dst.len(), size.area(), "destination grid has wrong length");

    for (y, row) in dst.chunks_exact_mut(size.width()).enumerate() {
        step_row(row, src, size, y);
    }
}

/// Compute row `y` of the next generation into `dst_row`.
///
/// Reads only from `src`, so disjoint rows of one destination can be filled
/// independently.
///
/// # Panics
///
/// If `dst_row` is not one row wide, `src` is not `size.area()` long, or `y`
/// is out of range.
pub fn step_row(dst_row: &mut [u8], src: &[u8], size: GridSize, y: usize) {
    let h = size.height();
    let w = size.width();
    assert_eq!(dst_row.len(), w, "destination row has wrong length");
    assert_eq!(src.len(), size.area(), "source grid has wrong length");
    assert!(y < h, "row {y} out of range for height {h}");

    // The three source rows touched by this output row, offset by -1, 0, +1.
    let rows = [(y + h - 1) % h, y, (y + 1) % h].map(|ny| &src[ny * w..(ny + 1) * w]);

    for (x, cell) in dst_row.iter_mut().enumerate() {
        let mut live_count = 0u8;
        for row in &rows {
            for dx in 0..3 {
                live_count += row[(x + dx + w - 1) % w];
            }
        }

        *cell = match (src[y * w + x], live_count) {
            (_, 3) => 1, // Birth, or survival with two neighbours
            (1, 4) => 1, // Survival with three neighbours
            _ => 0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid(height: usize, width: usize, live: &[(usize, usize)]) -> Vec<u8> {
        let mut cells = vec![0; height * width];
        for &(y, x) in live {
            cells[y * width + x] = 1;
        }
        cells
    }

    fn next(src: &[u8], size: GridSize) -> Vec<u8> {
        let mut dst = vec![0; size.area()];
        step(&mut dst, src, size);
        dst
    }

    #[rstest]
    #[case::dead_with_three(0, 3, 1)]
    #[case::dead_with_two(0, 2, 0)]
    #[case::dead_with_four(0, 4, 0)]
    #[case::alive_with_one(1, 1, 0)]
    #[case::alive_with_two(1, 2, 1)]
    #[case::alive_with_three(1, 3, 1)]
    #[case::alive_with_four(1, 4, 0)]
    fn centre_cell_follows_b3_s23(#[case] centre: u8, #[case] neighbours: usize, #[case] expected: u8) {
        // 5x5 keeps the window of the centre free of wrap effects.
        let size = GridSize::new(5, 5).unwrap();
        let ring = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        let mut src = grid(5, 5, &ring[..neighbours]);
        src[2 * 5 + 2] = centre;

        let dst = next(&src, size);
        assert_eq!(dst[2 * 5 + 2], expected);
    }

    #[test]
    fn block_is_still_life() {
        let size = GridSize::new(6, 6).unwrap();
        let src = grid(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(next(&src, size), src);
    }

    #[test]
    fn corner_cells_wrap_into_a_block() {
        // (0,0), (0,w-1), (h-1,0), (h-1,w-1) are mutual neighbours on the torus.
        let size = GridSize::new(6, 7).unwrap();
        let src = grid(6, 7, &[(0, 0), (0, 6), (5, 0), (5, 6)]);
        assert_eq!(next(&src, size), src);
    }

    #[test]
    fn lone_corner_cell_sees_wrapped_neighbours() {
        // Three live cells across the wrap make (0,0) a birth.
        let size = GridSize::new(5, 5).unwrap();
        let src = grid(5, 5, &[(4, 4), (4, 0), (0, 4)]);
        let dst = next(&src, size);
        assert_eq!(dst[0], 1);
    }

    #[test]
    fn blinker_oscillates() {
        let size = GridSize::new(5, 5).unwrap();
        let horizontal = grid(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next(&horizontal, size), vertical);
        assert_eq!(next(&vertical, size), horizontal);
    }

    #[test]
    fn single_row_and_column_grids() {
        // With height 1 every row offset lands on the same row.
        let size = GridSize::new(1, 4).unwrap();
        let dst = next(&[1, 1, 0, 0], size);
        assert!(dst.iter().all(|&c| c <= 1));

        let size = GridSize::new(1, 1).unwrap();
        // The lone cell is counted nine times.
        assert_eq!(next(&[1], size), vec![0]);
        assert_eq!(next(&[0], size), vec![0]);
    }

    #[test]
    #[should_panic(expected = "source grid has wrong length")]
    fn rejects_short_source() {
        let size = GridSize::new(2, 2).unwrap();
        let mut dst = vec![0; 4];
        step(&mut dst, &[0; 3], size);
    }
}
