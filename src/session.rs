use crate::board::Board;
use crate::config::Config;
use crate::difficulty::DifficultyPreset;
use crate::grid::{Cell, Direction};
use crate::snake::Snake;

/// What a single tick did, so the caller can fire the matching cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused frame, nothing advanced.
    Paused,
    /// Normal move, tail dropped.
    Moved,
    /// Apple eaten: snake grew, score and speed went up.
    AteApple,
    /// Wall or self collision; the session is over.
    GameOver,
}

/// One run of the game: board, snake, apple, score and pacing. Created fresh
/// on every play start and discarded on restart or quit.
#[derive(Debug, Clone)]
pub struct Session {
    pub board: Board,
    pub snake: Snake,
    pub apple: Cell,
    pub score: u32,
    pub tick_rate: f32,
    pub paused: bool,
    pub difficulty: DifficultyPreset,
    speed_increment: f32,
}

impl Session {
    pub fn new(config: &Config, difficulty: DifficultyPreset) -> Self {
        let board = Board::from_config(config);
        let snake = Snake::new(
            board.center(),
            Direction::Right,
            config.initial_snake_length,
            board.cell_size,
        );
        let apple = Self::spawn_apple(&board, &snake);
        Self {
            board,
            snake,
            apple,
            score: 0,
            tick_rate: difficulty.tick_rate,
            paused: false,
            difficulty,
            speed_increment: config.speed_increment,
        }
    }

    /// Seconds between ticks at the current speed.
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Direction changes are dropped while paused and guarded against
    /// reversal; the last accepted change this frame steers the next tick.
    pub fn steer(&mut self, direction: Direction) {
        if self.paused {
            return;
        }
        self.snake.steer(direction);
    }

    /// Advance the game by one tick: move the head, check walls and body,
    /// then either grow on the apple or drop the tail.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused {
            return TickOutcome::Paused;
        }

        let new_head = self.snake.next_head(self.board.cell_size);
        if !self.board.is_interior(new_head) || self.snake.self_collides(new_head) {
            return TickOutcome::GameOver;
        }

        self.snake.push_head(new_head);

        if new_head == self.apple {
            self.apple = Self::spawn_apple(&self.board, &self.snake);
            self.score += 1;
            self.tick_rate += self.speed_increment;
            TickOutcome::AteApple
        } else {
            self.snake.drop_tail();
            TickOutcome::Moved
        }
    }

    /// Resample until the apple lands on a cell the snake does not occupy.
    fn spawn_apple(board: &Board, snake: &Snake) -> Cell {
        loop {
            let cell = board.random_interior_cell();
            if !snake.contains(cell) {
                return cell;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medium() -> DifficultyPreset {
        DifficultyPreset::new("Medium", 10.0)
    }

    fn session() -> Session {
        Session::new(&Config::default(), medium())
    }

    #[test]
    fn test_fresh_session() {
        let s = session();
        assert_eq!(s.score, 0);
        assert_eq!(s.snake.len(), 3);
        assert_eq!(s.snake.head(), Cell::new(400, 300));
        assert_eq!(s.tick_rate, 10.0);
        assert!(!s.paused);
        assert!(s.board.is_interior(s.apple));
        assert!(!s.snake.contains(s.apple));
    }

    #[test]
    fn test_eating_grows_and_speeds_up() {
        let mut s = session();
        s.apple = s.snake.next_head(s.board.cell_size);

        let outcome = s.tick();

        assert_eq!(outcome, TickOutcome::AteApple);
        assert_eq!(s.snake.len(), 4);
        assert_eq!(s.score, 1);
        assert!((s.tick_rate - 10.1).abs() < 1e-6);
        // Respawned apple is interior and off the snake.
        assert!(s.board.is_interior(s.apple));
        assert!(!s.snake.contains(s.apple));
    }

    #[test]
    fn test_plain_move_keeps_length_and_apple() {
        let mut s = session();
        s.apple = Cell::new(60, 60);
        let apple_before = s.apple;

        let outcome = s.tick();

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(s.snake.len(), 3);
        assert_eq!(s.score, 0);
        assert_eq!(s.apple, apple_before);
        assert_eq!(s.snake.head(), Cell::new(420, 300));
    }

    #[test]
    fn test_wall_collision_ends_session() {
        let mut s = session();
        // Head on the last interior column, still moving right.
        s.snake = Snake::new(Cell::new(720, 300), Direction::Right, 3, 20);
        s.score = 4;
        let snake_before = s.snake.clone();

        let outcome = s.tick();

        assert_eq!(outcome, TickOutcome::GameOver);
        assert_eq!(s.score, 4);
        assert_eq!(s.snake, snake_before);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut s = session();
        s.steer(Direction::Left);
        assert_eq!(s.snake.direction, Direction::Right);
        s.apple = Cell::new(60, 60);
        s.tick();
        assert_eq!(s.snake.head(), Cell::new(420, 300));
    }

    #[test]
    fn test_moving_into_vacating_tail_ends_session() {
        let mut s = session();
        s.snake = Snake {
            body: vec![
                Cell::new(400, 300),
                Cell::new(400, 320),
                Cell::new(420, 320),
                Cell::new(420, 300),
            ],
            direction: Direction::Right,
        };

        assert_eq!(s.tick(), TickOutcome::GameOver);
    }

    #[test]
    fn test_paused_tick_changes_nothing() {
        let mut s = session();
        s.apple = Cell::new(60, 60);
        s.toggle_pause();

        let snake_before = s.snake.clone();
        for _ in 0..5 {
            assert_eq!(s.tick(), TickOutcome::Paused);
        }
        // Steering is dropped while paused too.
        s.steer(Direction::Up);

        assert_eq!(s.snake, snake_before);
        assert_eq!(s.apple, Cell::new(60, 60));
        assert_eq!(s.score, 0);

        s.toggle_pause();
        assert_eq!(s.tick(), TickOutcome::Moved);
    }

    #[test]
    fn test_score_and_speed_monotone_over_apples() {
        let mut s = session();
        let mut last_rate = s.tick_rate;
        for _ in 0..3 {
            s.apple = s.snake.next_head(s.board.cell_size);
            assert_eq!(s.tick(), TickOutcome::AteApple);
            assert!(s.tick_rate > last_rate);
            last_rate = s.tick_rate;
        }
        assert_eq!(s.score, 3);
        assert_eq!(s.snake.len(), 6);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut s = session();
        s.apple = s.snake.next_head(s.board.cell_size);
        s.tick();
        assert_eq!(s.score, 1);

        // A restart builds a brand new session from the same preset.
        let fresh = Session::new(&Config::default(), s.difficulty.clone());
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.snake.len(), 3);
        assert_eq!(fresh.snake.head(), Cell::new(400, 300));
        assert_eq!(fresh.tick_rate, 10.0);
    }
}
