//! Grid pathfinding demonstrator: a rectangular grid of cells, an A* search
//! engine that reports its exploration through a transition callback, and an
//! orchestrator that runs one search per agent toward a shared goal.

pub mod algorithms;
pub mod config;
pub mod grid;
pub mod orchestrator;
