use super::types::validate_coordinates;
use super::*;
use crate::error::{SquareTreeError, SquareTreeResult};
use smallvec::SmallVec;
use tracing::{debug, trace};

impl<T> SquareTree<T> {
    pub fn add(&mut self, x: f64, y: f64, payload: T) -> SquareTreeResult<PointRef<T>> {
        self.add_point(Point::shared(x, y, payload))
    }

    /// Indexes `point`, growing the tree first if it lies outside the current
    /// bounding square. Adding a point that is already indexed is a no-op.
    pub fn add_point(&mut self, point: PointRef<T>) -> SquareTreeResult<PointRef<T>> {
        let (x, y) = (point.x(), point.y());
        validate_coordinates(x, y)?;
        if !self.bounds().contains(x, y) {
            self.grow(x, y)?;
        }

        let mut search = self.search_pool.checkout();
        search.reset_at(x, y, self.bounds());
        search.leaf_descent(&self.root);

        let overflow = match search.node_mut(&mut self.root) {
            Node::Leaf(stack) => {
                if stack.insert(point.clone()) {
                    self.len += 1;
                }
                stack.len() > self.max_stack_size
            }
            Node::Internal(_) => false,
        };

        if overflow {
            if search.bbs > self.min_size {
                self.subdivide(&search);
            } else {
                debug!(
                    x = search.bbx,
                    y = search.bby,
                    size = search.bbs,
                    max_stack_size = self.max_stack_size,
                    "leaf at min size overflows its stack"
                );
            }
        }

        self.search_pool.checkin(search);
        Ok(point)
    }

    // Doubles the bounding square toward (x, y) until it is contained. The
    // tree is untouched when the grown square would leave the float range.
    pub(crate) fn grow(&mut self, x: f64, y: f64) -> SquareTreeResult<()> {
        let mut square = self.bounds();
        let mut wraps: SmallVec<[Quadrant; 8]> = SmallVec::new();
        while !square.contains(x, y) {
            let left = x < square.x;
            let down = y < square.y;
            if left {
                square.x -= square.size;
            }
            if down {
                square.y -= square.size;
            }
            square.size *= 2.0;
            if !(square.size.is_finite() && square.x.is_finite() && square.y.is_finite()) {
                return Err(SquareTreeError::BoundsOverflow { x, y });
            }
            // The old root ends up on the side away from the point
            wraps.push(Quadrant::from_halves(left, down));
        }

        // A leaf root simply covers the larger square
        if !self.root.is_leaf() {
            for &quadrant in &wraps {
                let root = std::mem::take(&mut self.root);
                self.root = Node::wrap(root, quadrant);
            }
        }
        self.x = square.x;
        self.y = square.y;
        self.size = square.size;

        debug!(
            doublings = wraps.len(),
            x = self.x,
            y = self.y,
            size = self.size,
            "grew bounding square"
        );
        Ok(())
    }

    /// Splits the leaf under `search` and recursively splits every child that
    /// still holds more than `max_stack_size` points. The cursor is not moved.
    pub(crate) fn subdivide(&mut self, search: &Search) {
        let square = search.bounds();
        let max_stack_size = self.max_stack_size;

        let node = search.node_mut(&mut self.root);
        let Node::Leaf(stack) = node else {
            return;
        };
        let mut stack = std::mem::take(stack);
        *node = Node::split();
        let Node::Internal(children) = node else {
            return;
        };

        trace!(
            x = square.x,
            y = square.y,
            size = square.size,
            points = stack.len(),
            "subdividing leaf"
        );

        for point in stack.drain() {
            let quadrant = square.quadrant_of(point.x(), point.y());
            if let Node::Leaf(child) = &mut children[quadrant.index()] {
                child.insert(point);
            }
        }

        let overflowing: SmallVec<[Quadrant; 4]> = Quadrant::ALL
            .into_iter()
            .filter(|quadrant| children[quadrant.index()].len() > max_stack_size)
            .collect();
        if overflowing.is_empty() {
            return;
        }

        if square.size / 2.0 <= self.min_size {
            debug!(
                x = square.x,
                y = square.y,
                size = square.size / 2.0,
                "leaves at min size overflow their stack"
            );
            return;
        }

        for quadrant in overflowing {
            let mut child_search = search.clone();
            child_search.descend_to(quadrant);
            self.subdivide(&child_search);
        }
    }
}
