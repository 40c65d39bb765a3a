//! Contract of the simulation engine that owns the board.

use crate::types::{CellState, Grid, MovementCommand};

/// The engine owns cell storage and every state transition.
///
/// The render loop only reads [`SimulationEngine::cells`]; mutation happens
/// through the movement entry points, on the same thread, between frames.
pub trait SimulationEngine {
    fn grid(&self) -> Grid;

    /// Advance engine-internal state by one round.
    fn new_round(&mut self);

    fn up(&mut self);
    fn down(&mut self);
    fn left(&mut self);
    fn right(&mut self);

    /// Current cell storage, row-major, at least `grid().len()` long.
    fn cells(&self) -> &[CellState];

    /// Forward one command to its entry point.
    fn apply(&mut self, cmd: MovementCommand) {
        match cmd {
            MovementCommand::Up => self.up(),
            MovementCommand::Down => self.down(),
            MovementCommand::Left => self.left(),
            MovementCommand::Right => self.right(),
        }
    }
}
