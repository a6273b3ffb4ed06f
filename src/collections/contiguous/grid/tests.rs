#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::panic::assert_panics;

#[test]
fn test_grid2_indexing() {
    let mut grid = Grid2::new(3, 4, 0_usize);
    assert_eq!(grid.size(), 12);
    assert_eq!(grid.dims(), (3, 4));

    for x in 0..3 {
        for y in 0..4 {
            grid[(x, y)] = x * 10 + y;
        }
    }

    assert_eq!(grid[(0, 0)], 0);
    assert_eq!(grid[(2, 3)], 23);
    assert_eq!(
        grid.row(2)[3],
        grid[(2, 3)],
        "Row access should agree with tuple indexing."
    );

    // Flat layout is row-major: y varies fastest. Flat access goes through the slice deref, as
    // bracket indexing on the grid itself resolves to the tuple impl.
    assert_eq!(&(*grid)[..4], &[0, 1, 2, 3], "First row should lead the flat slice.");
    assert_eq!((*grid)[4], grid[(1, 0)], "Flat offset 4 should start the second row.");
}

#[test]
fn test_grid2_bounds() {
    let grid = Grid2::new(3, 4, 0_u8);

    assert_panics!(
        {
            let _ = grid[(3, 0)];
        },
        "An x index at the dimension should panic."
    );
    assert_panics!(
        {
            let _ = grid[(0, 4)];
        },
        "A y index at the dimension should panic."
    );
    // In-bounds per axis, even though x * ydim + y would stay within the allocation.
    assert_panics!(
        {
            let _ = grid[(0, 100)];
        },
        "Each axis should be checked independently, not just the flat offset."
    );
}

#[test]
fn test_grid3_indexing() {
    let mut grid = Grid3::new(6, 5, 4, 0.0_f64);
    assert_eq!(grid.size(), 120);
    assert_eq!(grid.dims(), (6, 5, 4));

    grid[(5, 4, 3)] = 10.2;
    assert_eq!(grid[(5, 4, 3)], 10.2);
    assert_eq!(
        grid.row(5, 4)[3],
        10.2,
        "Row access should agree with tuple indexing."
    );
    assert_eq!(
        grid.slab(5)[4 * 4 + 3],
        10.2,
        "Slab access should agree with tuple indexing."
    );

    let flat_index = grid.len() - 1;
    assert_eq!(
        (*grid)[flat_index], 10.2,
        "The highest coordinate should be the last flat element."
    );
}

#[test]
fn test_grid3_bounds() {
    let grid = Grid3::new(2, 3, 4, 0_u8);

    assert_panics!({
        let _ = grid[(2, 0, 0)];
    });
    assert_panics!({
        let _ = grid[(0, 3, 0)];
    });
    assert_panics!({
        let _ = grid[(0, 0, 4)];
    });
}

#[test]
fn test_fill_and_iteration() {
    let grid = Grid2::new(4, 3, 7_u32);
    assert!(
        grid.iter().all(|&v| v == 7),
        "Every cell should hold the fill value."
    );
    assert_eq!(grid.iter().count(), 12);

    let mut grid = grid;
    for v in &mut grid {
        *v += 1;
    }
    assert_eq!(grid.iter().sum::<u32>(), 8 * 12);

    let collected: Vector<u32> = grid.into_iter().collect();
    assert_eq!(collected.len(), 12, "By-value iteration should visit every cell.");
}

#[test]
fn test_clone_and_equality() {
    let mut grid = Grid2::new(2, 2, 0_u8);
    grid[(1, 0)] = 9;

    let cloned = grid.clone();
    assert_eq!(grid, cloned, "A clone should be equal to its source.");

    let mut other = Grid2::new(2, 2, 0_u8);
    assert_ne!(grid, other);
    other[(1, 0)] = 9;
    assert_eq!(grid, other);

    // Same flat contents, different shape.
    let wide = Grid2::new(1, 4, 0_u8);
    let tall = Grid2::new(4, 1, 0_u8);
    assert_ne!(wide, tall, "Equal contents with different dims shouldn't be equal.");
}
