use std::{thread::sleep, time::Duration};

use crate::apple::Apple;
use crate::snake::{Snake, Direction::{*, self}};
use crate::term::TermManager;
use TickOutcome::*;

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use rand::Rng;
use rand::rngs::ThreadRng;

// 20 ticks per second
const TICK_INTERVAL_MS: u64 = 50;

/// Everything the simulation owns: one snake, one apple. Pure in-memory
/// state, advanced one tick at a time; the terminal never gets near it.
pub struct GameState {
    snake: Snake,
    apple: Apple,
}

pub enum TickOutcome {
    Moved,
    AteApple,
    Collided,
}

impl GameState {
    pub fn new(rng: &mut impl Rng) -> Self {
        let snake = Snake::new(Direction::random(rng));
        let apple = Apple::new(rng, snake.positions());
        GameState { snake, apple }
    }

    /// One simulation step: commit the steering input, move the snake, then
    /// resolve what the new head landed on. A self-collision resets the
    /// snake in place and moves the apple off the fresh body; eating the
    /// apple grows the snake and moves the apple to a free cell.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        self.snake.commit_pending_direction();
        self.snake.advance();

        if self.snake.has_self_collision() {
            self.snake.reset(rng);
            self.apple.reposition(rng, self.snake.positions());
            Collided
        } else if self.snake.head() == self.apple.position() {
            self.snake.grow();
            self.apple.reposition(rng, self.snake.positions());
            AteApple
        } else {
            Moved
        }
    }

    pub fn snake(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn draw(&self, term: &mut TermManager) {
        self.apple.draw(term);
        self.snake.draw(term);
    }

    #[cfg(test)]
    pub fn from_parts(snake: Snake, apple: Apple) -> Self {
        GameState { snake, apple }
    }

    #[cfg(test)]
    pub fn apple(&self) -> &Apple {
        &self.apple
    }
}

pub struct SnakeGame {
    term: TermManager,
    rng: ThreadRng,
    exit_requested: bool,
}

impl SnakeGame {
    pub fn new() -> Self {
        SnakeGame { term: TermManager::new(), rng: rand::thread_rng(), exit_requested: false }
    }

    pub fn initialize(&mut self) {
        self.term.setup();
    }

    /// The main loop: runs at the fixed tick rate until the user asks to
    /// quit, then restores the terminal and returns normally.
    pub fn run(&mut self) {
        let mut state = GameState::new(&mut self.rng);

        while !self.exit_requested {
            sleep(Duration::from_millis(TICK_INTERVAL_MS));

            self.term.clear();
            self.handle_keys(state.snake());
            state.tick(&mut self.rng);
            state.draw(&mut self.term);
            self.term.present();
        }

        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn handle_keys(&mut self, snake: &mut Snake) {
        for key_ev in self.term.read_key_events_queue() {
            match &key_ev {
                ev if is_ctrl_c(ev) => self.exit_requested = true,
                KeyEvent { code, modifiers: _ } => match code {
                    KeyCode::Char('w') | KeyCode::Up => snake.steer(Up),
                    KeyCode::Char('a') | KeyCode::Left => snake.steer(Left),
                    KeyCode::Char('s') | KeyCode::Down => snake.steer(Down),
                    KeyCode::Char('d') | KeyCode::Right => snake.steer(Right),
                    KeyCode::Char('q') | KeyCode::Esc => self.exit_requested = true,
                    _ => {}
                }
            }
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
