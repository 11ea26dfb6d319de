use crate::{Cell, GridInt};
use rand::Rng;

// The logical drawing surface, in pixels. Any remainder pixels that don't
// fit a whole cell are unused margin.
pub const SCREEN_WIDTH: u16 = 640;
pub const SCREEN_HEIGHT: u16 = 480;
pub const CELL_SIZE: u16 = 20;

pub const GRID_WIDTH: GridInt = (SCREEN_WIDTH / CELL_SIZE) as GridInt;
pub const GRID_HEIGHT: GridInt = (SCREEN_HEIGHT / CELL_SIZE) as GridInt;

/// Wraps a raw coordinate onto the toroidal grid. `rem_euclid` so that
/// stepping left from column 0 lands on the last column instead of -1.
pub fn wrap(coord: GridInt, axis_cells: GridInt) -> GridInt {
    coord.rem_euclid(axis_cells)
}

/// The cell at the center of the grid, where the snake spawns.
pub fn center() -> Cell {
    (GRID_WIDTH / 2, GRID_HEIGHT / 2)
}

/// Draws a uniformly random cell, each axis independent.
pub fn random_cell(rng: &mut impl Rng) -> Cell {
    (rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wrap_is_identity_inside_the_grid() {
        for x in 0..GRID_WIDTH {
            assert_eq!(wrap(x, GRID_WIDTH), x);
        }
    }

    #[test]
    fn wrap_handles_negative_coordinates() {
        assert_eq!(wrap(-1, GRID_WIDTH), GRID_WIDTH - 1);
        assert_eq!(wrap(-1, GRID_HEIGHT), GRID_HEIGHT - 1);
        assert_eq!(wrap(-GRID_WIDTH, GRID_WIDTH), 0);
    }

    #[test]
    fn wrap_handles_overflowing_coordinates() {
        assert_eq!(wrap(GRID_WIDTH, GRID_WIDTH), 0);
        assert_eq!(wrap(GRID_HEIGHT + 3, GRID_HEIGHT), 3);
    }

    #[test]
    fn grid_dimensions_derive_from_the_screen() {
        assert_eq!(GRID_WIDTH, 32);
        assert_eq!(GRID_HEIGHT, 24);
        assert_eq!(center(), (16, 12));
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let (x, y) = random_cell(&mut rng);
            assert!((0..GRID_WIDTH).contains(&x));
            assert!((0..GRID_HEIGHT).contains(&y));
        }
    }
}
