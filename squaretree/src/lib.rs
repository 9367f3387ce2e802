pub mod error;
mod object_pool;
pub mod square_tree;

pub use error::{SquareTreeError, SquareTreeResult};
pub use square_tree::{
    Config, Node, Point, PointRef, Points, Quadrant, Search, Square, SquareTree, Stack,
};
