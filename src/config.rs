use log::debug;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::events::GenerationEvents;
use crate::generators;
use crate::grid::Grid;
use crate::units::{Depth, Width};

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_DEPTH: usize = 20;

/// Everything a host supplies to get a maze: its size, where the walk starts and, for a
/// reproducible maze, a seed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: Width,
    pub depth: Depth,
    pub start: GridCoordinate,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            width: Width(DEFAULT_WIDTH),
            depth: Depth(DEFAULT_DEPTH),
            start: GridCoordinate::new(0, 0),
            seed: None,
        }
    }
}

impl MazeConfig {
    /// The rng the generator draws from, seeded when a seed is configured.
    pub fn rng(&self) -> XorShiftRng {
        match self.seed {
            Some(seed) => XorShiftRng::seed_from_u64(seed),
            None => XorShiftRng::from_entropy(),
        }
    }

    /// Create the grid and carve a maze into it.
    pub fn generate<E: GenerationEvents>(&self, events: E) -> Result<Grid> {
        let mut grid = Grid::new(self.width, self.depth)?;
        let mut rng = self.rng();
        debug!("generating {} x {} maze from {}, seed {:?}",
               self.width.0, self.depth.0, self.start, self.seed);
        generators::recursive_backtracker(&mut grid, self.start, &mut rng, events)?;
        Ok(grid)
    }
}

#[derive(Debug, Default)]
pub struct MazeConfigBuilder {
    config: MazeConfig,
}

impl MazeConfigBuilder {
    pub fn new() -> MazeConfigBuilder {
        MazeConfigBuilder::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.config.width = Width(width);
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.config.depth = Depth(depth);
        self
    }

    pub fn start(mut self, start: GridCoordinate) -> Self {
        self.config.start = start;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Check the configuration describes a maze that can be generated.
    pub fn build(self) -> Result<MazeConfig> {
        let MazeConfig { width: Width(w), depth: Depth(d), start, .. } = self.config;
        if w < 1 || d < 1 {
            return Err(ErrorKind::InvalidDimension(w, d).into());
        }
        if start.x as usize >= w || start.z as usize >= d {
            return Err(ErrorKind::OutOfBounds(start.x, start.z).into());
        }
        Ok(self.config)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::events::{EventLog, NoEvents};
    use crate::pathing;

    #[test]
    fn defaults() {
        let config = MazeConfigBuilder::new().build().unwrap();
        assert_eq!(config, MazeConfig::default());
        assert_eq!(config.start, GridCoordinate::new(0, 0));
        assert_eq!(config.width, Width(DEFAULT_WIDTH));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builder_validates() {
        let err = MazeConfigBuilder::new().width(0).build().unwrap_err();
        match *err.kind() {
            ErrorKind::InvalidDimension(0, DEFAULT_DEPTH) => (),
            ref other => panic!("unexpected error {:?}", other),
        }

        let err = MazeConfigBuilder::new()
            .width(4)
            .depth(4)
            .start(GridCoordinate::new(1, 4))
            .build()
            .unwrap_err();
        match *err.kind() {
            ErrorKind::OutOfBounds(1, 4) => (),
            ref other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = MazeConfigBuilder::new()
            .width(9)
            .depth(7)
            .start(GridCoordinate::new(4, 3))
            .seed(Some(123))
            .build()
            .unwrap();
        let mut log = EventLog::new();
        let a = config.generate(&mut log).unwrap();
        let b = config.generate(NoEvents).unwrap();

        assert_eq!(a.cells(), b.cells());
        assert!(pathing::is_perfect_maze(&a));
        assert_eq!(log.visit_order().first(), Some(&GridCoordinate::new(4, 3)));
    }

    #[test]
    fn unseeded_generation_still_perfect() {
        let config = MazeConfigBuilder::new().width(6).depth(3).build().unwrap();
        let g = config.generate(NoEvents).unwrap();
        assert!(pathing::is_perfect_maze(&g));
    }

    #[test]
    fn generate_surfaces_dimension_errors() {
        let config = MazeConfig { depth: Depth(0), ..MazeConfig::default() };
        assert!(config.generate(NoEvents).is_err());
    }
}
