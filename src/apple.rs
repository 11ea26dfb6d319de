use crate::Cell;
use crate::grid;
use crate::term::{TermManager, APPLE_COLOR};

use rand::Rng;

pub struct Apple {
    position: Cell,
}

impl Apple {
    /// Spawns the apple at a random cell outside `occupied`.
    pub fn new(rng: &mut impl Rng, occupied: &[Cell]) -> Self {
        let mut apple = Apple { position: (0, 0) };
        apple.reposition(rng, occupied);
        apple
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the apple to a random cell not covered by `occupied`, drawing
    /// candidates until one lands on a free cell. Never returns if the
    /// snake covers the entire grid; at that point the board is full and
    /// the game is over anyway.
    pub fn reposition(&mut self, rng: &mut impl Rng, occupied: &[Cell]) {
        loop {
            let cell = grid::random_cell(rng);
            if !occupied.contains(&cell) {
                self.position = cell;
                break;
            }
        }
    }

    pub fn draw(&self, term: &mut TermManager) {
        term.draw_cell(self.position, APPLE_COLOR);
    }

    #[cfg(test)]
    pub fn at(position: Cell) -> Self {
        Apple { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GRID_HEIGHT, GRID_WIDTH};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // A snaking path through the grid, row by row, used to build occupied
    // sets of arbitrary size
    fn boustrophedon(len: usize) -> Vec<Cell> {
        (0..len)
            .map(|i| {
                let y = (i as i16) / GRID_WIDTH;
                let x = (i as i16) % GRID_WIDTH;
                if y % 2 == 0 { (x, y) } else { (GRID_WIDTH - 1 - x, y) }
            })
            .collect()
    }

    #[test]
    fn never_lands_on_the_occupied_set() {
        let mut rng = StdRng::seed_from_u64(123);
        let occupied = boustrophedon(40);
        let mut apple = Apple::new(&mut rng, &occupied);

        for _ in 0..200 {
            apple.reposition(&mut rng, &occupied);
            assert!(!occupied.contains(&apple.position()));
        }
    }

    #[test]
    fn finds_the_single_free_cell_on_a_nearly_full_board() {
        let mut rng = StdRng::seed_from_u64(99);
        let total = (GRID_WIDTH * GRID_HEIGHT) as usize;
        let occupied = boustrophedon(total - 1);
        let free = boustrophedon(total)[total - 1];

        let mut apple = Apple::at((0, 0));
        apple.reposition(&mut rng, &occupied);
        assert_eq!(apple.position(), free);
    }

    #[test]
    fn disjoint_under_randomized_occupied_sets() {
        let mut rng = StdRng::seed_from_u64(2024);
        let total = (GRID_WIDTH * GRID_HEIGHT) as usize;

        for _ in 0..50 {
            let len = rng.gen_range(1..total);
            let occupied = boustrophedon(len);
            let apple = Apple::new(&mut rng, &occupied);
            assert!(!occupied.contains(&apple.position()));
        }
    }
}
