use super::node::Node;
use super::types::{Quadrant, Square};
use crate::object_pool::Resettable;
use smallvec::SmallVec;

/// Traversal cursor.
///
/// Holds the target coordinates, the square bounding the current node and the
/// quadrants taken from the root to reach it. The cursor owns no node
/// references: the current node is resolved against the root on demand, which
/// keeps a cursor valid to hold while the tree is mutated along its path.
#[derive(Debug, Clone)]
pub struct Search {
    pub x: f64,
    pub y: f64,
    pub bbx: f64,
    pub bby: f64,
    pub bbs: f64,
    path: SmallVec<[Quadrant; 16]>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 1.0)
    }
}

impl Resettable for Search {
    fn reset(&mut self) {
        self.reset(0.0, 0.0, 0.0, 0.0, 1.0);
    }
}

impl Search {
    pub fn new(x: f64, y: f64, bbx: f64, bby: f64, bbs: f64) -> Self {
        Self {
            x,
            y,
            bbx,
            bby,
            bbs,
            path: SmallVec::new(),
        }
    }

    /// Re-targets the cursor at the root square without reallocating its path.
    pub fn reset(&mut self, x: f64, y: f64, bbx: f64, bby: f64, bbs: f64) {
        self.x = x;
        self.y = y;
        self.bbx = bbx;
        self.bby = bby;
        self.bbs = bbs;
        self.path.clear();
    }

    pub(crate) fn reset_at(&mut self, x: f64, y: f64, root: Square) {
        self.reset(x, y, root.x, root.y, root.size);
    }

    #[inline(always)]
    pub fn bounds(&self) -> Square {
        Square::new(self.bbx, self.bby, self.bbs)
    }

    #[inline(always)]
    pub fn in_bounds(&self) -> bool {
        self.bounds().contains(self.x, self.y)
    }

    /// Quadrant of the current square holding the target. Assumes
    /// [`in_bounds`](Self::in_bounds).
    #[inline(always)]
    pub fn quadrant_of(&self) -> Quadrant {
        self.bounds().quadrant_of(self.x, self.y)
    }

    /// Moves one level down into `quadrant`. The caller guarantees the current
    /// node is internal.
    #[inline(always)]
    pub fn descend_to(&mut self, quadrant: Quadrant) {
        self.path.push(quadrant);
        self.bbs /= 2.0;
        if quadrant.is_right() {
            self.bbx += self.bbs;
        }
        if quadrant.is_top() {
            self.bby += self.bbs;
        }
    }

    #[inline(always)]
    pub fn descend_to_matching_quadrant(&mut self) {
        self.descend_to(self.quadrant_of());
    }

    /// Descends from the current node until a leaf is reached and returns it.
    pub fn leaf_descent<'a, T>(&mut self, root: &'a Node<T>) -> &'a Node<T> {
        let mut node = root.descend(&self.path);
        while let Node::Internal(children) = node {
            let quadrant = self.quadrant_of();
            self.descend_to(quadrant);
            node = &children[quadrant.index()];
        }
        node
    }

    pub fn node<'a, T>(&self, root: &'a Node<T>) -> &'a Node<T> {
        root.descend(&self.path)
    }

    pub(crate) fn node_mut<'a, T>(&self, root: &'a mut Node<T>) -> &'a mut Node<T> {
        root.descend_mut(&self.path)
    }

    /// Quadrant the current node occupies in its parent, `None` at the root.
    pub fn parent_quad(&self) -> Option<Quadrant> {
        self.path.last().copied()
    }

    pub fn parent_node<'a, T>(&self, root: &'a Node<T>) -> Option<&'a Node<T>> {
        let (_, ancestors) = self.path.split_last()?;
        Some(root.descend(ancestors))
    }

    pub fn path(&self) -> &[Quadrant] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
