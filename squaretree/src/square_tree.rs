mod config;
mod insert;
mod maintenance;
mod node;
mod query;
mod search;
mod types;

pub use config::Config;
pub use node::{Node, Stack};
pub use query::Points;
pub use search::Search;
pub use types::{Point, PointRef, Quadrant, Square};

use crate::error::SquareTreeResult;
use crate::object_pool::ObjectPool;

/// A quadtree over points that splits space into equal squares.
///
/// Points live only in leaves and split lines always run through the middle of
/// a node, so the tree needs no balancing. A leaf is subdivided once it holds
/// more than `max_stack_size` points, unless it is already `min_size` wide.
/// Inserting outside the bounding square grows the root, and removals collapse
/// subtrees that fall back under `max_stack_size` points.
///
/// The tree is single threaded: it hands out `Rc` point handles and is neither
/// `Send` nor `Sync`.
pub struct SquareTree<T> {
    x: f64,
    y: f64,
    size: f64,
    min_size: f64,
    max_stack_size: usize,
    root: Node<T>,
    len: usize,
    search_pool: ObjectPool<Search>,
    config: Config,
}

impl<T> SquareTree<T> {
    pub fn new(config: Config) -> SquareTreeResult<Self> {
        config.validate()?;
        Ok(Self::new_unchecked(config))
    }

    fn new_unchecked(config: Config) -> Self {
        Self {
            x: config.x,
            y: config.y,
            size: config.size(),
            min_size: config.min_size,
            max_stack_size: config.max_stack_size,
            root: Node::default(),
            len: 0,
            search_pool: ObjectPool::new(config.pool_size),
            config,
        }
    }
}

impl<T> Default for SquareTree<T> {
    fn default() -> Self {
        Self::new_unchecked(Config::default())
    }
}
