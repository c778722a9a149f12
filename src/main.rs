use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazes::{
    cells::GridCoordinate,
    config::MazeConfigBuilder,
    events::LogEvents,
    grid::{Grid, GridDisplay},
    pathing,
};
use std::rc::Rc;

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--width=<w>] [--depth=<d>] [--start-x=<x>] [--start-z=<z>] [--seed=<s>] [--show-path | --show-distances]

Options:
    -h --help              Show this screen.
    --width=<w>            The number of cells along x [default: 20].
    --depth=<d>            The number of cells along z [default: 20].
    --start-x=<x>          x coordinate of the cell the maze is carved from [default: 0].
    --start-z=<z>          z coordinate of the cell the maze is carved from [default: 0].
    --seed=<s>             Seed for the random number generator, the same seed gives the same maze.
    --show-path            Mark the longest path through the maze.
    --show-distances       Show the distance from the start cell to all other cells.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: usize,
    flag_depth: usize,
    flag_start_x: u32,
    flag_start_z: u32,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_show_distances: bool,
}

mod errors {
    // Wrap the library errors and the driver's argument failures in one chain.
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let config = MazeConfigBuilder::new()
        .width(args.flag_width)
        .depth(args.flag_depth)
        .start(GridCoordinate::new(args.flag_start_x, args.flag_start_z))
        .seed(args.flag_seed)
        .build()?;
    info!("maze configuration {:?}", config);

    let mut maze_grid = config.generate(LogEvents)?;

    set_maze_griddisplay(&mut maze_grid, &args, config.start)?;

    print!("{}", maze_grid);

    Ok(())
}

/// Decide what, if anything, is drawn inside the cells of the text rendering.
fn set_maze_griddisplay(maze_grid: &mut Grid, maze_args: &MazeArgs, start: GridCoordinate) -> Result<()> {

    if maze_args.flag_show_distances {

        let distances = pathing::Distances::new(maze_grid, start)?;
        maze_grid.set_grid_display(Some(Rc::new(distances) as Rc<dyn GridDisplay>));

    } else if maze_args.flag_show_path {

        let path = pathing::longest_path(maze_grid).unwrap_or_else(Vec::new);
        info!("longest path has {} cells", path.len());
        maze_grid.set_grid_display(Some(Rc::new(pathing::PathDisplay::new(&path)) as Rc<dyn GridDisplay>));
    }

    Ok(())
}
