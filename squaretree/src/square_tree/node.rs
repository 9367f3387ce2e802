use super::types::{PointRef, Quadrant};
use fxhash::FxHashMap;
use std::collections::hash_map::Values;
use std::rc::Rc;

/// Unordered set of points held by a leaf, keyed by point identity.
#[derive(Debug)]
pub struct Stack<T> {
    points: FxHashMap<usize, PointRef<T>>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self {
            points: FxHashMap::default(),
        }
    }
}

#[inline(always)]
fn identity<T>(point: &PointRef<T>) -> usize {
    Rc::as_ptr(point) as usize
}

impl<T> Stack<T> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &PointRef<T>) -> bool {
        self.points.contains_key(&identity(point))
    }

    pub fn iter(&self) -> Values<'_, usize, PointRef<T>> {
        self.points.values()
    }

    // Returns false when this exact point is already a member
    pub(crate) fn insert(&mut self, point: PointRef<T>) -> bool {
        let key = identity(&point);
        if self.points.contains_key(&key) {
            return false;
        }
        self.points.insert(key, point);
        true
    }

    pub(crate) fn remove(&mut self, point: &PointRef<T>) -> Option<PointRef<T>> {
        self.points.remove(&identity(point))
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = PointRef<T>> + '_ {
        self.points.drain().map(|(_, point)| point)
    }

    pub(crate) fn absorb(&mut self, other: Stack<T>) {
        if self.points.is_empty() {
            self.points = other.points;
        } else {
            self.points.extend(other.points);
        }
    }
}

/// A square region of the tree.
///
/// Leaves hold points directly. Internal nodes hold exactly four children,
/// indexed by [`Quadrant`], and never any points.
#[derive(Debug)]
pub enum Node<T> {
    Leaf(Stack<T>),
    Internal(Box<[Node<T>; 4]>),
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node::Leaf(Stack::default())
    }
}

impl<T> Node<T> {
    pub(crate) fn split() -> Self {
        Node::Internal(Box::new(std::array::from_fn(|_| Node::default())))
    }

    // The wrapped node lands in `quadrant`, its siblings are empty leaves
    pub(crate) fn wrap(node: Node<T>, quadrant: Quadrant) -> Self {
        let mut node = Some(node);
        Node::Internal(Box::new(std::array::from_fn(|i| {
            if i == quadrant.index() {
                node.take().unwrap_or_default()
            } else {
                Node::default()
            }
        })))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn stack(&self) -> Option<&Stack<T>> {
        match self {
            Node::Leaf(stack) => Some(stack),
            Node::Internal(_) => None,
        }
    }

    pub fn children(&self) -> Option<&[Node<T>; 4]> {
        match self {
            Node::Leaf(_) => None,
            Node::Internal(children) => Some(children),
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Node<T>> {
        self.children().map(|children| &children[quadrant.index()])
    }

    /// Number of points in this subtree.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(stack) => stack.len(),
            Node::Internal(children) => children.iter().map(Node::len).sum(),
        }
    }

    /// Whether this subtree holds more than `limit` points. Counting stops as
    /// soon as the limit is passed.
    pub fn len_exceeds(&self, limit: usize) -> bool {
        let mut total = 0;
        self.count_until(limit, &mut total);
        total > limit
    }

    fn count_until(&self, limit: usize, total: &mut usize) {
        match self {
            Node::Leaf(stack) => *total += stack.len(),
            Node::Internal(children) => {
                for child in children.iter() {
                    if *total > limit {
                        return;
                    }
                    child.count_until(limit, total);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Node::Leaf(stack) => stack.is_empty(),
            Node::Internal(children) => children.iter().all(Node::is_empty),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(children) => 1 + children.iter().map(Node::node_count).sum::<usize>(),
        }
    }

    /// Levels below this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Internal(children) => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    // Follows `path` as far as the tree allows
    pub(crate) fn descend(&self, path: &[Quadrant]) -> &Node<T> {
        let mut node = self;
        for quadrant in path {
            match node {
                Node::Internal(children) => node = &children[quadrant.index()],
                Node::Leaf(_) => {
                    debug_assert!(false, "cursor path runs past a leaf");
                    break;
                }
            }
        }
        node
    }

    pub(crate) fn descend_mut(&mut self, path: &[Quadrant]) -> &mut Node<T> {
        let mut node = self;
        for quadrant in path {
            match node {
                Node::Internal(children) => node = &mut children[quadrant.index()],
                Node::Leaf(_) => {
                    debug_assert!(false, "cursor path runs past a leaf");
                    break;
                }
            }
        }
        node
    }

    /// Replaces this subtree with a single leaf holding all of its points.
    pub(crate) fn collapse(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut stack = Stack::default();
        std::mem::take(self).drain_into(&mut stack);
        *self = Node::Leaf(stack);
    }

    fn drain_into(self, out: &mut Stack<T>) {
        match self {
            Node::Leaf(stack) => out.absorb(stack),
            Node::Internal(children) => {
                for child in *children {
                    child.drain_into(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square_tree::types::Point;

    fn leaf_with(count: usize) -> Node<usize> {
        let mut stack = Stack::default();
        for i in 0..count {
            stack.insert(Point::shared(0.0, 0.0, i));
        }
        Node::Leaf(stack)
    }

    #[test]
    fn len_exceeds_matches_len() {
        let mut root: Node<usize> = Node::split();
        if let Node::Internal(children) = &mut root {
            children[Quadrant::BottomLeft.index()] = leaf_with(2);
            children[Quadrant::TopRight.index()] = Node::wrap(leaf_with(3), Quadrant::TopLeft);
        }
        assert_eq!(root.len(), 5);
        for limit in 0..8 {
            assert_eq!(root.len_exceeds(limit), root.len() > limit, "limit {}", limit);
        }
        assert!(!Node::<usize>::default().len_exceeds(0));
    }
}
