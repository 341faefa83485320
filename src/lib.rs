//! # ant_automata
//!
//! A cellular-automaton ant colony simulation.
//! Ants wander a bounded grid one tick at a time, steered by a directional
//! momentum bias and leaving decaying pheromone trails behind them.

pub mod cell;
pub mod direction;
pub mod grid;
pub mod simulation;

pub use cell::Cell;
pub use direction::Direction;
pub use grid::Grid;
pub use grid::Region;
pub use simulation::Simulation;

mod replay;
