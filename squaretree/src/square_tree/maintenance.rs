use super::types::validate_coordinates;
use super::*;
use crate::error::SquareTreeResult;
use tracing::debug;

impl<T> SquareTree<T> {
    /// Removes `point` by identity. Returns false when it is not indexed.
    pub fn remove_point(&mut self, point: &PointRef<T>) -> bool {
        let (x, y) = (point.x(), point.y());
        if !self.bounds().contains(x, y) {
            return false;
        }

        let mut search = self.search_pool.checkout();
        search.reset_at(x, y, self.bounds());
        search.leaf_descent(&self.root);

        let removed = match search.node_mut(&mut self.root) {
            Node::Leaf(stack) => stack.remove(point).is_some(),
            Node::Internal(_) => false,
        };
        if removed {
            self.len -= 1;
            self.merge(&search);
        }

        self.search_pool.checkin(search);
        removed
    }

    /// Moves `point` to (x, y) by removing it and adding a new point with a
    /// clone of its payload. A point that was not indexed is simply added.
    pub fn relocate(&mut self, point: &PointRef<T>, x: f64, y: f64) -> SquareTreeResult<PointRef<T>>
    where
        T: Clone,
    {
        validate_coordinates(x, y)?;
        // Growing first leaves the old point in place if the new one can't fit
        if !self.bounds().contains(x, y) {
            self.grow(x, y)?;
        }
        self.remove_point(point);
        self.add(x, y, point.payload().clone())
    }

    /// Drops every point and restores the configured bounding square.
    pub fn clear(&mut self) {
        self.x = self.config.x;
        self.y = self.config.y;
        self.size = self.config.size();
        self.root = Node::default();
        self.len = 0;
    }

    // Collapses the highest ancestor of the cursor's leaf whose subtree fits in
    // one stack. Ancestors are visited bottom-up and the walk stops at the
    // first one still holding more than max_stack_size points.
    fn merge(&mut self, search: &Search) {
        let path = search.path();
        let mut target = None;
        for depth in (0..path.len()).rev() {
            if self.root.descend(&path[..depth]).len_exceeds(self.max_stack_size) {
                break;
            }
            target = Some(depth);
        }

        if let Some(depth) = target {
            let node = self.root.descend_mut(&path[..depth]);
            debug!(
                depth,
                points = node.len(),
                nodes = node.node_count(),
                "collapsing subtree"
            );
            node.collapse();
        }
    }
}
