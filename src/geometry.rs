//! Integer layout geometry: points, sizes, rectangles and border edges.
//!
//! Units are whole layout units, signed so that boxes scrolled past the
//! top or left of the document keep their true position.

/// A position in document coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The document origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width × height extent in layout units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in layout units.
    pub width: i32,
    /// Height in layout units.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned rectangle in document coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect anchored at `origin` with the given extent.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rect covers no area.
    pub const fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Whether the two rects share a region of positive area.
    ///
    /// Rects that only touch along an edge or a corner do not intersect,
    /// and an empty rect intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Per-side widths, used for borders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edges {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Edges {
    /// No border on any side.
    pub const ZERO: Self = Self::uniform(0);

    /// Create edges from individual sides, in CSS order.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same width on every side.
    pub const fn uniform(width: i32) -> Self {
        Self::new(width, width, width, width)
    }

    /// Left + right.
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom.
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}
