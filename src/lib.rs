//! **mazes** generates perfect mazes over rectangular grids with a randomized recursive
//! backtracker, and exposes the walls of every cell so the maze can be drawn or walked.
//!
//! ```
//! use mazes::config::MazeConfigBuilder;
//! use mazes::events::NoEvents;
//!
//! let maze = MazeConfigBuilder::new().width(8).depth(4).seed(Some(1)).build()?
//!     .generate(NoEvents)?;
//! assert_eq!(maze.links_count(), 8 * 4 - 1);
//! # Ok::<(), mazes::errors::Error>(())
//! ```

pub mod cells;
pub mod config;
pub mod errors;
pub mod events;
pub mod generators;
pub mod grid;
pub mod pathing;
pub mod units;
mod utils;
