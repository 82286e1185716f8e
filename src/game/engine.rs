use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake, grid_side},
};
use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed
    Idle,
    /// The snake moved one cell without eating
    Moved,
    /// The snake ate the food and grew by one
    Ate,
    /// The move hit something and ended the game
    Collided(CollisionType),
}

/// The game engine that owns the game state and handles all game logic
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let state = GameState::initial(&config);
        Self { config, state, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that need to set up a position
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Restore the initial state, whatever the current one is
    pub fn reset(&mut self) {
        info!("Resetting game (previous score {})", self.state.score);
        self.state = GameState::initial(&self.config);
    }

    /// Change the direction of travel unless `direction` reverses it.
    ///
    /// Returns whether the request was accepted. The next tick picks it up.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        let current = self.state.snake.direction;
        if current.is_opposite(direction) {
            debug!("Ignoring reversal from {:?} to {:?}", current, direction);
            return false;
        }

        self.state.snake.direction = direction;
        true
    }

    /// Advance the game by exactly one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Idle;
        }

        // Read once so a request landing mid-tick cannot split the move
        let direction = self.state.snake.direction;
        let new_head = self.state.snake.head().moved_in_direction(direction);
        trace!("Tick: head -> {:?} ({:?})", new_head, direction);

        if let Some(collision_type) = self.check_collision(new_head) {
            self.state.game_over = true;
            info!(
                "Game over: {:?} at {:?}, score {}",
                collision_type, new_head, self.state.score
            );
            return TickOutcome::Collided(collision_type);
        }

        let ate_food = new_head == self.state.food;
        self.state.snake.advance_to(new_head, ate_food);

        if ate_food {
            self.state.score += 1;
            self.state.food = self.spawn_food_avoid_snake();
            debug!(
                "Food eaten, score {}, next food at {:?}",
                self.state.score, self.state.food
            );
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Check if the new head position causes a collision.
    ///
    /// The body is checked before the tail moves, so stepping into the cell
    /// the tail is about to leave also counts as hitting yourself.
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random empty position.
    ///
    /// Plain rejection sampling; it never returns once the snake fills the grid.
    fn spawn_food_avoid_snake(&mut self) -> Position {
        spawn_food(&mut self.rng, self.config.grid_size, &self.state.snake)
    }
}

fn spawn_food<R: Rng>(rng: &mut R, grid_size: usize, snake: &Snake) -> Position {
    let side = grid_side(grid_size);
    loop {
        let x = rng.gen_range(0..side);
        let y = rng.gen_range(0..side);
        let pos = Position::new(x, y);

        if !snake.occupies(pos) {
            return pos;
        }
    }
}
