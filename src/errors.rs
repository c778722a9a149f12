// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
#![allow(deprecated)]

use error_chain::error_chain;

error_chain! {

    errors {
        // A grid must be at least one cell wide and one cell deep.
        InvalidDimension(width: usize, depth: usize) {
            description("invalid grid dimension")
            display("invalid grid dimension: {} x {}", width, depth)
        }

        // A coordinate outside of the grid's extent.
        OutOfBounds(x: u32, z: u32) {
            description("grid coordinate out of bounds")
            display("grid coordinate ({}, {}) is out of bounds", x, z)
        }

        // An operation was asked of a grid in the wrong state, e.g. generating on a used grid.
        InvalidState(reason: String) {
            description("invalid grid state")
            display("invalid grid state: {}", reason)
        }
    }
}
