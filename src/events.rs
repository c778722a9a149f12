//! Notifications sent out while a maze is carved, for whatever is presenting the maze.
//!
//! The generator never waits on or reads anything back from a sink.

use log::trace;

use crate::cells::{Direction, GridCoordinate};

pub trait GenerationEvents {
    /// The cell is now part of the maze.
    fn on_cell_visited(&mut self, _: GridCoordinate) {}

    /// One side of the cell has been opened up.
    fn on_wall_cleared(&mut self, _: GridCoordinate, _: Direction) {}
}

impl<'a, E: GenerationEvents + ?Sized> GenerationEvents for &'a mut E {
    #[inline]
    fn on_cell_visited(&mut self, coord: GridCoordinate) {
        (**self).on_cell_visited(coord)
    }

    #[inline]
    fn on_wall_cleared(&mut self, coord: GridCoordinate, direction: Direction) {
        (**self).on_wall_cleared(coord, direction)
    }
}

/// Ignores everything.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoEvents;

impl GenerationEvents for NoEvents {}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GenerationEvent {
    CellVisited(GridCoordinate),
    WallCleared(GridCoordinate, Direction),
}

/// Records every event in the order it was sent, e.g. to replay the carving later.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GenerationEvent>,
}

impl EventLog {
    pub fn new() -> EventLog {
        EventLog::default()
    }

    pub fn events(&self) -> &[GenerationEvent] {
        &self.events
    }

    /// The cells in the order they were visited.
    pub fn visit_order(&self) -> Vec<GridCoordinate> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                GenerationEvent::CellVisited(coord) => Some(coord),
                GenerationEvent::WallCleared(..) => None,
            })
            .collect()
    }

    pub fn walls_cleared_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| match **event {
                GenerationEvent::WallCleared(..) => true,
                GenerationEvent::CellVisited(_) => false,
            })
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GenerationEvents for EventLog {
    fn on_cell_visited(&mut self, coord: GridCoordinate) {
        self.events.push(GenerationEvent::CellVisited(coord));
    }

    fn on_wall_cleared(&mut self, coord: GridCoordinate, direction: Direction) {
        self.events.push(GenerationEvent::WallCleared(coord, direction));
    }
}

/// Writes each event to the `log` facade at trace level.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogEvents;

impl GenerationEvents for LogEvents {
    fn on_cell_visited(&mut self, coord: GridCoordinate) {
        trace!("visited cell {}", coord);
    }

    fn on_wall_cleared(&mut self, coord: GridCoordinate, direction: Direction) {
        trace!("cleared {} wall of cell {}", direction, coord);
    }
}
