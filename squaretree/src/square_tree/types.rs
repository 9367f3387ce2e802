use crate::error::{SquareTreeError, SquareTreeResult};
use std::rc::Rc;

pub(crate) const QUAD_RIGHT: u8 = 0b01;
pub(crate) const QUAD_TOP: u8 = 0b10;

/// One of the four equal sub-squares of a node.
///
/// Bit 0 selects the right half on x, bit 1 selects the top half on y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    BottomLeft = 0,
    BottomRight = QUAD_RIGHT,
    TopLeft = QUAD_TOP,
    TopRight = QUAD_RIGHT | QUAD_TOP,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopLeft,
        Quadrant::TopRight,
    ];

    #[inline(always)]
    pub fn from_halves(right: bool, top: bool) -> Self {
        match (right, top) {
            (false, false) => Quadrant::BottomLeft,
            (true, false) => Quadrant::BottomRight,
            (false, true) => Quadrant::TopLeft,
            (true, true) => Quadrant::TopRight,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub fn is_right(self) -> bool {
        self as u8 & QUAD_RIGHT != 0
    }

    #[inline(always)]
    pub fn is_top(self) -> bool {
        self as u8 & QUAD_TOP != 0
    }
}

/// Axis-aligned square, `[x, x + size) x [y, y + size)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Square {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    #[inline(always)]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }

    // Split lines belong to the greater half, so the center is TopRight
    #[inline(always)]
    pub fn quadrant_of(&self, x: f64, y: f64) -> Quadrant {
        let half = self.size / 2.0;
        Quadrant::from_halves(x >= self.x + half, y >= self.y + half)
    }

    #[inline(always)]
    pub fn child(&self, quadrant: Quadrant) -> Square {
        let half = self.size / 2.0;
        Square {
            x: if quadrant.is_right() { self.x + half } else { self.x },
            y: if quadrant.is_top() { self.y + half } else { self.y },
            size: half,
        }
    }
}

/// A coordinate with an attached payload.
///
/// Points are immutable once created. The tree tells points apart by
/// allocation, so two points at the same coordinates are distinct members.
#[derive(Debug)]
pub struct Point<T> {
    x: f64,
    y: f64,
    payload: T,
}

pub type PointRef<T> = Rc<Point<T>>;

impl<T> Point<T> {
    pub fn new(x: f64, y: f64, payload: T) -> Self {
        Self { x, y, payload }
    }

    pub fn shared(x: f64, y: f64, payload: T) -> PointRef<T> {
        Rc::new(Self::new(x, y, payload))
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }
}

#[inline(always)]
pub(crate) fn validate_coordinates(x: f64, y: f64) -> SquareTreeResult<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(SquareTreeError::InvalidCoordinates { x, y })
    }
}
