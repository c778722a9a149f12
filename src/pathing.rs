use itertools::Itertools;
use petgraph::algo::connected_components;
use smallvec::SmallVec;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::{Grid, GridDisplay};
use crate::utils::{self, FnvHashMap, FnvHashSet};

/// Number of passage steps from one start cell to every cell it can reach.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start_coordinate` along cleared walls.
    pub fn new(grid: &Grid, start_coordinate: GridCoordinate) -> Result<Distances> {

        let _ = grid.cell_at(start_coordinate)?;

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 0);

        // Every step costs the same so the first time a cell is reached is by a shortest route,
        // the distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let links = grid.links(*cell_coord).unwrap_or_default();
                for link_coordinate in &links {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Ok(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None if the cell cannot be reached from the start.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells at the maximum distance, in row major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted_by_key(|coord| (coord.z, coord.x))
            .collect()
    }
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if let Some(d) = self.distances.get(&coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

/// Marks the cells along a path.
#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// Walk back from `end_point` to the start of `distances_from_start`, always stepping to a
/// linked neighbour one closer to the start. The path is returned start first.
pub fn shortest_path(grid: &Grid,
                     distances_from_start: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {

    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {

        let closer = grid.links(current_coord)?
            .iter()
            .cloned()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(coord).map(|d| (coord, d))
            })
            .min_by_key(|&(_, d)| d);

        match closer {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // We have not got any closer to the start, the distances do not belong to this grid.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest path in the maze.
///
/// Works only as long as we are looking at a perfect maze, otherwise you get back some arbitrary
/// long path.
pub fn longest_path(grid: &Grid) -> Option<Vec<GridCoordinate>> {

    // The start of the longest path is the point furthest away from an arbitrary initial point
    let first_distances = Distances::new(grid, GridCoordinate::new(0, 0)).ok()?;
    let long_path_start_coordinate = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::new(grid, long_path_start_coordinate).ok()?;
    let end_point = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(grid, &distances_from_start, end_point)
}

/// Is every cell visited and are the passages a spanning tree over them?
pub fn is_perfect_maze(grid: &Grid) -> bool {
    let (_, edges) = grid.graph_size();
    grid.visited_count() == grid.size() &&
    grid.links_count() == edges.0 &&
    connected_components(&grid.passage_graph()) == 1
}

/// Cells that cannot be reached from `start`, in row major order.
pub fn unreachable_cells(grid: &Grid, start: GridCoordinate) -> Result<Vec<GridCoordinate>> {
    let distances = Distances::new(grid, start)?;
    Ok(grid.iter().filter(|coord| !distances.distances.contains_key(coord)).collect())
}
