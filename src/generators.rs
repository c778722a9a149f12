use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cells::{Direction, GridCoordinate};
use crate::errors::*;
use crate::events::GenerationEvents;
use crate::grid::Grid;

/// Apply the recursive backtracker maze generation algorithm to a fresh grid.
///
/// Starting at `start` it walks randomly to unvisited neighbours, knocking down the wall it
/// passes through, and when it reaches a dead end it backs up along its own path until it finds
/// a cell that still has an unvisited neighbour. It stops when it has backed up past the start.
/// The carved passages form a spanning tree over every cell of the grid: a perfect maze.
///
/// The output depends only on the grid size, `start` and the numbers drawn from `rng`, so a
/// seeded rng reproduces the same maze.
///
/// Fails with `OutOfBounds` if `start` is not on the grid and with `InvalidState` unless the grid
/// is fresh, i.e. no cell visited and no wall cleared.
pub fn recursive_backtracker<R, E>(grid: &mut Grid,
                                   start: GridCoordinate,
                                   rng: &mut R,
                                   mut events: E)
                                   -> Result<()>
    where R: Rng + ?Sized,
          E: GenerationEvents
{
    let mut walker = Backtracker::new(grid, start)?;
    let mut visited = 0;
    while walker.step(rng, &mut events)?.is_some() {
        visited += 1;
    }
    debug!("recursive backtracker from {} visited {} cells", start, visited);
    Ok(())
}

/// What one step of the walk did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GenerationStep {
    /// The cell the walk came from, None for the start cell.
    pub previous: Option<GridCoordinate>,
    /// The newly visited cell.
    pub current: GridCoordinate,
    /// The side of `previous` that was opened towards `current`.
    pub cleared: Option<Direction>,
}

// The walk path back to the start. A frame's unvisited neighbours are looked up afresh each
// time it is on top of the stack as deeper branches may have visited some of them.
#[derive(Debug, Copy, Clone)]
struct Frame {
    previous: Option<GridCoordinate>,
    current: GridCoordinate,
}

/// The recursive backtracker with its recursion turned into an explicit stack, so that
/// it can be driven one visited cell at a time.
///
/// Dropping it part way through leaves the grid as a consistent snapshot: some cells visited, the
/// walls between them cleared in pairs, the rest untouched.
#[derive(Debug)]
pub struct Backtracker<'g> {
    grid: &'g mut Grid,
    start: Option<GridCoordinate>,
    stack: Vec<Frame>,
}

impl<'g> Backtracker<'g> {
    pub fn new(grid: &'g mut Grid, start: GridCoordinate) -> Result<Backtracker<'g>> {
        let _ = grid.cell_at(start)?;
        if !grid.is_fresh() {
            return Err(ErrorKind::InvalidState(format!("grid is not fresh: {} of {} cells visited, {} passages open",
                                                       grid.visited_count(),
                                                       grid.size(),
                                                       grid.links_count()))
                .into());
        }

        Ok(Backtracker {
            grid,
            start: Some(start),
            stack: Vec::new(),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Number of cells on the current walk path, i.e. the recursion depth.
    #[inline]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_done(&self) -> bool {
        self.start.is_none() && self.stack.is_empty()
    }

    /// Visit the next cell, backtracking as far as needed to find one.
    ///
    /// Returns None once every cell reachable from the start has been visited.
    pub fn step<R, E>(&mut self, rng: &mut R, events: &mut E) -> Result<Option<GenerationStep>>
        where R: Rng + ?Sized,
              E: GenerationEvents
    {
        if let Some(start) = self.start.take() {
            return self.carve(None, start, events).map(Some);
        }

        while let Some(frame) = self.stack.last().cloned() {
            let unvisited = self.grid.unvisited_neighbours(frame.current);

            // Uniform over whichever neighbours remain, not biased to the order they are listed in.
            match unvisited.choose(rng) {
                Some(&next) => return self.carve(Some(frame.current), next, events).map(Some),
                None => {
                    trace!("backtracking from {} (entered from {:?})", frame.current, frame.previous);
                    let _ = self.stack.pop();
                }
            }
        }

        Ok(None)
    }

    fn carve<E>(&mut self,
                previous: Option<GridCoordinate>,
                current: GridCoordinate,
                events: &mut E)
                -> Result<GenerationStep>
        where E: GenerationEvents
    {
        self.grid.visit(current)?;
        events.on_cell_visited(current);

        let cleared = match previous {
            Some(previous_coord) => {
                let direction = self.grid.clear_walls_between(previous_coord, current)?;
                events.on_wall_cleared(previous_coord, direction);
                events.on_wall_cleared(current, direction.opposite());
                Some(direction)
            }
            None => None,
        };

        self.stack.push(Frame { previous, current });

        Ok(GenerationStep { previous, current, cleared })
    }
}
