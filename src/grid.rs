use std::fmt;
use std::rc::Rc;

use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;

use crate::cells::{Cell, CoordinateSmallVec, Direction, GridCoordinate, Walls, CANONICAL_DIRECTIONS};
use crate::errors::*;
use crate::units::{Depth, EdgesCount, NodesCount, Width};

pub type OffsetSmallVec = SmallVec<[(i32, i32); 4]>;

/// Something that can fill in the body of a cell when the grid is drawn as text.
pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}

/// A rectangular grid of cells, `width` cells along x and `depth` cells along z.
///
/// The cells are stored in row major order. The topology is fixed at construction, only the state
/// inside each cell (visited flag, walls) changes afterwards.
pub struct Grid {
    width: Width,
    depth: Depth,
    cells: Vec<Cell>,
    grid_display: Option<Rc<dyn GridDisplay>>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, depth: {:?}, visited: {:?}, links: {:?}",
               self.width, self.depth, self.visited_count(), self.links_count())
    }
}

impl Grid {
    /// Create a `width` x `depth` grid of unvisited cells with all their walls standing.
    pub fn new(width: Width, depth: Depth) -> Result<Grid> {
        let (Width(w), Depth(d)) = (width, depth);
        let max_side = u32::MAX as usize;
        if w < 1 || d < 1 || w > max_side || d > max_side {
            return Err(ErrorKind::InvalidDimension(w, d).into());
        }
        let cells_count = w.checked_mul(d).ok_or(ErrorKind::InvalidDimension(w, d))?;

        let cells = (0..cells_count)
            .map(|index| Cell::new(index_to_grid_coordinate(w, index)))
            .collect();

        Ok(Grid {
            width,
            depth,
            cells,
            grid_display: None,
        })
    }

    #[inline]
    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid_display = grid_display;
    }

    #[inline]
    pub fn grid_display(&self) -> &Option<Rc<dyn GridDisplay>> {
        &self.grid_display
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Node and edge counts of the passage graph of a finished perfect maze.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (NodesCount(cells_count), EdgesCount(cells_count - 1))
    }

    /// All the cells in row major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_at(&self, coord: GridCoordinate) -> Result<&Cell> {
        let index = self.checked_index(coord)?;
        Ok(&self.cells[index])
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.z as usize) < self.depth.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.z as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    /// The `(dx, dz)` steps from `coord` that stay on the grid, tested right, left, front, back.
    pub fn neighbour_offsets(&self, coord: GridCoordinate) -> Result<OffsetSmallVec> {
        let _ = self.checked_index(coord)?;
        Ok(CANONICAL_DIRECTIONS.iter()
            .filter(|dir| self.neighbour_at_direction(coord, **dir).is_some())
            .map(|dir| dir.offset())
            .collect())
    }

    /// Cells to the right, left, front or back of a particular cell, but not
    /// necessarily linked by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CANONICAL_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Neighbours that the maze walk has not reached yet.
    pub fn unvisited_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CANONICAL_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .filter(|neighbour| !self.cells[self.index_unchecked(*neighbour)].is_visited())
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: Direction)
                                  -> Option<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Mark a cell as part of the maze.
    pub(crate) fn visit(&mut self, coord: GridCoordinate) -> Result<()> {
        let index = self.checked_index(coord)?;
        self.cells[index].visit();
        Ok(())
    }

    /// Knock down the wall between two adjacent cells, on both sides.
    ///
    /// Returns the side of `previous` that was opened, `current` has the opposite side opened.
    pub(crate) fn clear_walls_between(&mut self,
                                      previous: GridCoordinate,
                                      current: GridCoordinate)
                                      -> Result<Direction> {
        let previous_index = self.checked_index(previous)?;
        let current_index = self.checked_index(current)?;

        let direction = Direction::between(previous, current)
            .filter(|dir| self.neighbour_at_direction(previous, *dir) == Some(current))
            .ok_or_else(|| {
                ErrorKind::InvalidState(format!("cells {} and {} are not adjacent", previous, current))
            })?;

        self.cells[previous_index].clear_wall(direction);
        self.cells[current_index].clear_wall(direction.opposite());
        Ok(direction)
    }

    /// True while no cell has been visited and every wall is still standing.
    pub fn is_fresh(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_visited() && cell.walls() == Walls::all())
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// Are two cells in the grid linked by a passage?
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        Direction::between(a, b)
            .map_or(false, |dir| {
                self.neighbour_at_direction(a, dir) == Some(b) && self.is_neighbour_linked(a, dir)
            })
    }

    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: Direction) -> bool {
        self.neighbour_at_direction(coord, direction).is_some() &&
        self.cell_at(coord).map_or(false, |cell| !cell.has_wall(direction))
    }

    /// Cells that are linked to a particular cell by a passage.
    /// None if the coordinate is not on the grid.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        let cell = self.cell_at(coord).ok()?;
        Some(cell.walls()
            .cleared()
            .into_iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, dir))
            .collect())
    }

    /// Number of passages (cleared wall pairs) in the grid.
    pub fn links_count(&self) -> usize {
        self.iter_links().count()
    }

    /// Every passage once, as a (cell, cell to its right or front) pair.
    pub fn iter_links(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        self.cells.iter().flat_map(move |cell| {
            let coord = cell.coord();
            [Direction::Right, Direction::Front]
                .iter()
                .filter(|dir| !cell.has_wall(**dir))
                .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
                .map(|neighbour| (coord, neighbour))
                .collect::<SmallVec<[(GridCoordinate, GridCoordinate); 2]>>()
        })
    }

    /// The passages as an undirected graph. Node indices follow `grid_coordinate_to_index`.
    pub fn passage_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let mut graph = UnGraph::with_capacity(self.size(), self.size() - 1);
        for cell in &self.cells {
            let _ = graph.add_node(cell.coord());
        }
        for (a, b) in self.iter_links() {
            let a_index = NodeIndex::new(self.index_unchecked(a));
            let b_index = NodeIndex::new(self.index_unchecked(b));
            let _ = graph.add_edge(a_index, b_index, ());
        }
        graph
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_length: self.width.0,
            cells_count: self.size(),
        }
    }

    pub fn iter_row(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Row,
            current_index: 0,
            width: self.width.0,
            depth: self.depth.0,
        }
    }

    pub fn iter_column(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Column,
            current_index: 0,
            width: self.width.0,
            depth: self.depth.0,
        }
    }

    fn checked_index(&self, coord: GridCoordinate) -> Result<usize> {
        self.grid_coordinate_to_index(coord)
            .ok_or_else(|| ErrorKind::OutOfBounds(coord.x, coord.z).into())
    }

    #[inline]
    fn index_unchecked(&self, coord: GridCoordinate) -> usize {
        coord.z as usize * self.width.0 + coord.x as usize
    }
}

// Box-drawing glyphs indexed by the arms leaving a wall junction: left 1, right 2, up 4, down 8.
const JUNCTIONS: [&str; 16] = [
    " ", "╴", "╶", "─", "╵", "┘", "└", "┴", "╷", "┐", "┌", "┬", "│", "┤", "├", "┼",
];

impl Grid {
    // Is there a wall segment running along z on the x = `boundary` line in row `z`?
    fn wall_along_z(&self, boundary: usize, z: usize) -> bool {
        boundary == 0 || boundary == self.width.0 ||
        !self.is_neighbour_linked(GridCoordinate::new(boundary as u32 - 1, z as u32), Direction::Right)
    }

    // Is there a wall segment running along x on the z = `boundary` line in column `x`?
    fn wall_along_x(&self, x: usize, boundary: usize) -> bool {
        boundary == 0 || boundary == self.depth.0 ||
        !self.is_neighbour_linked(GridCoordinate::new(x as u32, boundary as u32 - 1), Direction::Front)
    }

    fn junction(&self, x: usize, z: usize) -> &'static str {
        let left = x > 0 && self.wall_along_x(x - 1, z);
        let right = x < self.width.0 && self.wall_along_x(x, z);
        let up = z > 0 && self.wall_along_z(x, z - 1);
        let down = z < self.depth.0 && self.wall_along_z(x, z);
        JUNCTIONS[left as usize | (right as usize) << 1 | (up as usize) << 2 | (down as usize) << 3]
    }
}

/// Text picture of the maze, z = 0 on the top line so `Front` points down the page.
///
/// Every cell is three glyphs wide. Wall lines alternate with cell lines, the wall line junctions
/// are picked from the segments meeting there.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (width, depth) = (self.width.0, self.depth.0);

        for z in 0..=depth {
            let mut wall_line = String::new();
            for x in 0..=width {
                wall_line.push_str(self.junction(x, z));
                if x < width {
                    wall_line.push_str(if self.wall_along_x(x, z) { "───" } else { "   " });
                }
            }
            writeln!(f, "{}", wall_line)?;

            if z == depth {
                break;
            }
            let mut cell_line = String::new();
            for x in 0..=width {
                cell_line.push_str(if self.wall_along_z(x, z) { "│" } else { " " });
                if x < width {
                    let body = self.grid_display
                        .as_ref()
                        .map_or_else(|| String::from("   "),
                                     |display| display.render_cell_body(GridCoordinate::new(x as u32, z as u32)));
                    cell_line.push_str(&body);
                }
            }
            writeln!(f, "{}", cell_line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_length: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = index_to_grid_coordinate(self.row_length, self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()

impl<'a> IntoIterator for &'a Grid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Copy, Clone)]
enum BatchIterType {
    Row,
    Column,
}
#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    width: usize,
    depth: usize,
}
impl BatchIter {
    fn batches_count(&self) -> usize {
        match self.iter_type {
            BatchIterType::Row => self.depth,
            BatchIterType::Column => self.width,
        }
    }
}
impl Iterator for BatchIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index < self.batches_count() {
            let index = self.current_index as u32;
            let coords = match self.iter_type {
                BatchIterType::Row => {
                    (0..self.width).map(|x| GridCoordinate::new(x as u32, index)).collect()
                }
                BatchIterType::Column => {
                    (0..self.depth).map(|z| GridCoordinate::new(index, z as u32)).collect()
                }
            };
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.batches_count() - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

fn index_to_grid_coordinate(row_length: usize, one_dimensional_index: usize) -> GridCoordinate {
    let z = one_dimensional_index / row_length;
    let x = one_dimensional_index - (z * row_length);
    GridCoordinate::new(x as u32, z as u32)
}


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools; // a trait

    fn grid(w: usize, d: usize) -> Grid {
        Grid::new(Width(w), Depth(d)).expect("valid grid dimensions")
    }

    // Compare a smallvec to e.g. a vec! or &[T].
    macro_rules! assert_smallvec_eq {
        ($x:expr, $y:expr) => (assert_eq!(&*$x, &*$y))
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for &(w, d) in &[(0, 1), (1, 0), (0, 0)] {
            let err = Grid::new(Width(w), Depth(d)).unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidDimension(ew, ed) => assert_eq!((ew, ed), (w, d)),
                ref other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn new_grid_is_fresh_and_walled() {
        let g = grid(3, 5);
        assert_eq!(g.size(), 15);
        assert!(g.is_fresh());
        assert_eq!(g.visited_count(), 0);
        assert_eq!(g.links_count(), 0);
        for coord in g.iter() {
            let cell = g.cell_at(coord).unwrap();
            assert_eq!(cell.coord(), coord);
            assert_eq!(cell.walls().standing_count(), 4);
            assert!(!cell.is_visited());
        }
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let g = grid(3, 2);
        assert!(g.cell_at(GridCoordinate::new(2, 1)).is_ok());
        for coord in &[GridCoordinate::new(3, 0), GridCoordinate::new(0, 2), GridCoordinate::new(u32::MAX, 0)] {
            let err = g.cell_at(*coord).unwrap_err();
            match *err.kind() {
                ErrorKind::OutOfBounds(x, z) => assert_eq!(GridCoordinate::new(x, z), *coord),
                ref other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn neighbour_cells() {
        let g = grid(10, 10);

        let check_expected_neighbours = |coord, expected_neighbours: &[GridCoordinate]| {
            let node_indices: Vec<GridCoordinate> = g.neighbours(coord).iter().cloned().sorted().collect();
            let expected_indices: Vec<GridCoordinate> = expected_neighbours.iter()
                                                                           .cloned()
                                                                           .sorted()
                                                                           .collect();
            assert_eq!(node_indices, expected_indices);
        };
        let gc = |x, z| GridCoordinate::new(x, z);

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // side element examples
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(0, 8), &[gc(1, 8), gc(0, 7), gc(0, 9)]);

        // Some place with 4 neighbours inside the grid
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);

        // off the grid
        assert!(g.neighbours(gc(10, 10)).is_empty());
    }

    #[test]
    fn neighbour_offsets_in_canonical_order() {
        let g = grid(3, 3);
        let gc = |x, z| GridCoordinate::new(x, z);
        assert_smallvec_eq!(g.neighbour_offsets(gc(1, 1)).unwrap(), &[(1, 0), (-1, 0), (0, 1), (0, -1)]);
        assert_smallvec_eq!(g.neighbour_offsets(gc(0, 0)).unwrap(), &[(1, 0), (0, 1)]);
        assert_smallvec_eq!(g.neighbour_offsets(gc(2, 2)).unwrap(), &[(-1, 0), (0, -1)]);
        assert!(g.neighbour_offsets(gc(3, 0)).is_err());

        let single = grid(1, 1);
        assert!(single.neighbour_offsets(gc(0, 0)).unwrap().is_empty());
    }

    #[test]
    fn neighbour_at_dir() {
        let g = grid(2, 2);
        let gc = |x, z| GridCoordinate::new(x, z);
        let check_neighbour = |coord, dir: Direction, expected| {
            assert_eq!(g.neighbour_at_direction(coord, dir), expected);
        };
        check_neighbour(gc(0, 0), Direction::Back, None);
        check_neighbour(gc(0, 0), Direction::Front, Some(gc(0, 1)));
        check_neighbour(gc(0, 0), Direction::Right, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), Direction::Left, None);

        check_neighbour(gc(1, 1), Direction::Back, Some(gc(1, 0)));
        check_neighbour(gc(1, 1), Direction::Front, None);
        check_neighbour(gc(1, 1), Direction::Right, None);
        check_neighbour(gc(1, 1), Direction::Left, Some(gc(0, 1)));
    }

    #[test]
    fn unvisited_neighbours_shrink_as_cells_are_visited() {
        let mut g = grid(3, 3);
        let gc = |x, z| GridCoordinate::new(x, z);
        assert_eq!(g.unvisited_neighbours(gc(1, 1)).len(), 4);
        g.visit(gc(2, 1)).unwrap();
        g.visit(gc(1, 0)).unwrap();
        assert_smallvec_eq!(g.unvisited_neighbours(gc(1, 1)), &[gc(0, 1), gc(1, 2)]);
        assert!(!g.is_fresh());
        assert_eq!(g.visited_count(), 2);
        assert!(g.visit(gc(3, 3)).is_err());
    }

    #[test]
    fn grid_coordinate_as_index() {
        let g = grid(3, 2);
        let gc = |x, z| GridCoordinate::new(x, z);
        let indices: Vec<Option<usize>> = g.iter()
            .map(|coord| g.grid_coordinate_to_index(coord))
            .collect();
        let expected = (0..6).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        assert_eq!(g.grid_coordinate_to_index(gc(2, 2)), None);
        assert_eq!(g.grid_coordinate_to_index(gc(3, 1)), None);
        assert_eq!(g.grid_coordinate_to_index(gc(u32::MAX, u32::MAX)), None);
    }

    #[test]
    fn cell_iter() {
        let g = grid(2, 2);
        assert_eq!(g.iter().len(), 4);
        assert_eq!(g.iter().collect::<Vec<GridCoordinate>>(),
                   &[GridCoordinate::new(0, 0),
                     GridCoordinate::new(1, 0),
                     GridCoordinate::new(0, 1),
                     GridCoordinate::new(1, 1)]);
    }

    #[test]
    fn row_and_column_iter() {
        let g = grid(2, 3);
        let gc = |x, z| GridCoordinate::new(x, z);
        assert_eq!(g.iter_row().collect::<Vec<Vec<GridCoordinate>>>(),
                   vec![vec![gc(0, 0), gc(1, 0)],
                        vec![gc(0, 1), gc(1, 1)],
                        vec![gc(0, 2), gc(1, 2)]]);
        assert_eq!(g.iter_column().collect::<Vec<Vec<GridCoordinate>>>(),
                   vec![vec![gc(0, 0), gc(0, 1), gc(0, 2)],
                        vec![gc(1, 0), gc(1, 1), gc(1, 2)]]);
    }

    #[test]
    fn clearing_walls_is_symmetric() {
        let mut g = grid(3, 3);
        let gc = |x, z| GridCoordinate::new(x, z);
        let centre = gc(1, 1);

        let check = |g: &mut Grid, other, expected: Direction| {
            let dir = g.clear_walls_between(centre, other).unwrap();
            assert_eq!(dir, expected);
            assert!(!g.cell_at(centre).unwrap().has_wall(expected));
            assert!(!g.cell_at(other).unwrap().has_wall(expected.opposite()));
            assert!(g.is_linked(centre, other) && g.is_linked(other, centre));
        };
        check(&mut g, gc(2, 1), Direction::Right);
        check(&mut g, gc(0, 1), Direction::Left);
        check(&mut g, gc(1, 2), Direction::Front);
        check(&mut g, gc(1, 0), Direction::Back);

        assert_eq!(g.cell_at(centre).unwrap().walls().standing_count(), 0);
        assert_eq!(g.links_count(), 4);
        assert_eq!(g.visited_count(), 0);
        assert!(!g.is_fresh());
        assert_eq!(g.links(centre).unwrap().iter().cloned().sorted().collect::<Vec<_>>(),
                   vec![gc(1, 0), gc(0, 1), gc(2, 1), gc(1, 2)].into_iter().sorted().collect::<Vec<_>>());
    }

    #[test]
    fn no_links_between_non_adjacent_cells() {
        let mut g = grid(4, 4);
        let gc = |x, z| GridCoordinate::new(x, z);
        for &(a, b) in &[(gc(0, 0), gc(0, 0)), (gc(0, 0), gc(1, 1)), (gc(0, 0), gc(2, 0))] {
            let err = g.clear_walls_between(a, b).unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidState(_) => (),
                ref other => panic!("unexpected error {:?}", other),
            }
        }
        assert!(g.clear_walls_between(gc(0, 0), gc(100, 100)).is_err());
        assert_eq!(g.links_count(), 0);
        assert!(!g.is_linked(gc(0, 0), gc(1, 1)));
    }

    #[test]
    fn links_iter_and_passage_graph() {
        let mut g = grid(2, 2);
        let gc = |x, z| GridCoordinate::new(x, z);
        g.clear_walls_between(gc(0, 0), gc(1, 0)).unwrap();
        g.clear_walls_between(gc(1, 1), gc(1, 0)).unwrap();

        let links = g.iter_links().collect::<Vec<_>>();
        assert_eq!(links, vec![(gc(0, 0), gc(1, 0)), (gc(1, 0), gc(1, 1))]);

        let graph = g.passage_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph[NodeIndex::new(3)], gc(1, 1));
        assert!(graph.find_edge(NodeIndex::new(1), NodeIndex::new(3)).is_some());
        assert!(graph.find_edge(NodeIndex::new(0), NodeIndex::new(2)).is_none());
    }

    #[test]
    fn text_rendering() {
        let mut g = grid(2, 2);
        let gc = |x, z| GridCoordinate::new(x, z);
        let closed = g.to_string();
        assert_eq!(closed, "┌───┬───┐\n│   │   │\n├───┼───┤\n│   │   │\n└───┴───┘\n");

        g.clear_walls_between(gc(0, 0), gc(1, 0)).unwrap();
        g.clear_walls_between(gc(1, 0), gc(1, 1)).unwrap();
        g.clear_walls_between(gc(1, 1), gc(0, 1)).unwrap();
        let maze = g.to_string();
        assert_eq!(maze, "┌───────┐\n│       │\n├───╴   │\n│       │\n└───────┘\n");

        // nothing left meeting at the centre junction
        g.clear_walls_between(gc(0, 0), gc(0, 1)).unwrap();
        assert_eq!(g.to_string(), "┌───────┐\n│       │\n│       │\n│       │\n└───────┘\n");

        let mut corridor = grid(3, 1);
        corridor.clear_walls_between(gc(0, 0), gc(1, 0)).unwrap();
        assert_eq!(corridor.to_string(), "┌───────┬───┐\n│       │   │\n└───────┴───┘\n");
    }

    struct Marker;
    impl GridDisplay for Marker {
        fn render_cell_body(&self, coord: GridCoordinate) -> String {
            if coord == GridCoordinate::new(0, 0) {
                String::from(" S ")
            } else {
                String::from("   ")
            }
        }
    }

    #[test]
    fn text_rendering_with_display() {
        let mut g = grid(1, 1);
        g.set_grid_display(Some(Rc::new(Marker) as Rc<dyn GridDisplay>));
        assert!(g.grid_display().is_some());
        assert_eq!(g.to_string(), "┌───┐\n│ S │\n└───┘\n");
    }
}
