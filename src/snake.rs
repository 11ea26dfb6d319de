use crate::{Cell, GridInt};
use crate::grid::{self, GRID_HEIGHT, GRID_WIDTH};
use crate::term::{TermManager, SNAKE_COLOR};

use rand::Rng;
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

const ALL_DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

impl Direction {
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        ALL_DIRECTIONS[rng.gen_range(0..ALL_DIRECTIONS.len())]
    }
}

pub struct Snake {
    positions: Vec<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
}

impl Snake {
    /// A fresh snake: one segment at the grid center, growing toward
    /// nothing yet, heading wherever `direction` points.
    pub fn new(direction: Direction) -> Self {
        Snake {
            positions: vec![grid::center()],
            direction,
            pending_direction: None,
            target_length: 1,
        }
    }

    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Requests a direction change for the next tick. A request to reverse
    /// into the currently committed direction is dropped, not queued.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending_direction = Some(direction);
        }
    }

    /// Applies the pending direction, if any. Called exactly once per tick,
    /// before `advance`. The opposite-direction guard is repeated here so
    /// the committed direction can never flip within a single tick.
    pub fn commit_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            if direction != self.direction.opposite() {
                self.direction = direction;
            }
        }
    }

    /// Moves the snake one cell in its committed direction, wrapping around
    /// the grid edges. Inserts the new head, then drops the tail segment
    /// unless the body is still shorter than its target length.
    pub fn advance(&mut self) {
        let (dx, dy) = self.direction.delta();
        let (head_x, head_y) = self.head();
        let new_head = (
            grid::wrap(head_x + dx, GRID_WIDTH),
            grid::wrap(head_y + dy, GRID_HEIGHT),
        );

        self.positions.insert(0, new_head);
        if self.positions.len() > self.target_length {
            self.positions.pop();
        }
    }

    /// True iff the head occupies the same cell as any other segment.
    pub fn has_self_collision(&self) -> bool {
        self.positions[1..].contains(&self.head())
    }

    /// Bumps the target length; the body catches up on the next `advance`,
    /// which skips the tail truncation for one tick.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Puts the snake back into its starting state in place: a single
    /// segment at the center, a fresh random direction, nothing pending.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.positions.clear();
        self.positions.push(grid::center());
        self.direction = Direction::random(rng);
        self.pending_direction = None;
        self.target_length = 1;
    }

    pub fn draw(&self, term: &mut TermManager) {
        for &cell in &self.positions {
            term.draw_cell(cell, SNAKE_COLOR);
        }
    }

    #[cfg(test)]
    pub fn from_body(positions: Vec<Cell>, direction: Direction) -> Self {
        let target_length = positions.len();
        Snake { positions, direction, pending_direction: None, target_length }
    }
}
