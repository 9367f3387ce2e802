use super::*;
use std::collections::hash_map::Values;

impl<T> SquareTree<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current root square. Grows as points are added outside of it.
    pub fn bounds(&self) -> Square {
        Square::new(self.x, self.y, self.size)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Cursor positioned on the leaf covering `point`'s coordinates.
    pub fn locate(&self, point: &PointRef<T>) -> Option<Search> {
        self.locate_xy(point.x(), point.y())
    }

    pub fn locate_xy(&self, x: f64, y: f64) -> Option<Search> {
        let mut search = Search::default();
        search.reset_at(x, y, self.bounds());
        if !search.in_bounds() {
            return None;
        }
        search.leaf_descent(&self.root);
        Some(search)
    }

    pub fn leaf(&self, search: &Search) -> &Node<T> {
        search.node(&self.root)
    }

    pub fn contains(&self, point: &PointRef<T>) -> bool {
        self.locate(point)
            .and_then(|search| search.node(&self.root).stack())
            .is_some_and(|stack| stack.contains(point))
    }

    /// Every indexed point, leaf by leaf in quadrant order.
    pub fn points(&self) -> Points<'_, T> {
        Points {
            nodes: vec![&self.root],
            current: None,
        }
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Square>) {
        let mut pending = vec![(&self.root, self.bounds())];
        while let Some((node, square)) = pending.pop() {
            bounding_boxes.push(square);
            if let Node::Internal(children) = node {
                for quadrant in Quadrant::ALL.into_iter().rev() {
                    pending.push((&children[quadrant.index()], square.child(quadrant)));
                }
            }
        }
    }
}

pub struct Points<'a, T> {
    nodes: Vec<&'a Node<T>>,
    current: Option<Values<'a, usize, PointRef<T>>>,
}

impl<'a, T> Iterator for Points<'a, T> {
    type Item = &'a PointRef<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.current.as_mut().and_then(Iterator::next) {
                return Some(point);
            }
            match self.nodes.pop()? {
                Node::Leaf(stack) => self.current = Some(stack.iter()),
                Node::Internal(children) => self.nodes.extend(children.iter().rev()),
            }
        }
    }
}
