mod game;
mod term;
mod grid;
mod snake;
mod apple;

pub type GridInt = i16;
pub type Cell = (GridInt, GridInt);

fn main() {
    let mut game = game::SnakeGame::new();
    game.initialize();

    // The game loop returns once the user asks to quit (Esc, Q or CTRL+C)
    game.run();
}
