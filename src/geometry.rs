//! Geometry primitives shared by the layout engine and its consumers.
//!
//! All values are f32 screen-space units. The engine writes [`Rect`]s, the
//! renderer and hit-tester read them back.

// =============================================================================
// Rect
// =============================================================================

/// An absolute screen-space rectangle.
///
/// This is what a layout pass produces for every box: origin at the top-left,
/// non-negative extent after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// The zero rectangle every box starts with.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    /// Create a new rectangle.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rectangle.
    ///
    /// The top and left edges are inclusive, the bottom and right edges
    /// exclusive, so adjacent rectangles never both claim a shared edge.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Compute the intersection of two rectangles.
    ///
    /// Returns `None` when they do not overlap. Used by the renderer for
    /// clipping decisions.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.w).min(other.x + other.w);
        let y2 = (self.y + self.h).min(other.y + other.h);

        if x2 > x1 && y2 > y1 {
            Some(Rect {
                x: x1,
                y: y1,
                w: x2 - x1,
                h: y2 - y1,
            })
        } else {
            None
        }
    }
}

// =============================================================================
// Edges
// =============================================================================

/// Per-side thickness values (margin or padding).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    /// All four sides zero.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Create edges with individual side values.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same thickness on all four sides.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Combined left + right thickness.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top + bottom thickness.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

// =============================================================================
// Tests
// =============================================================================
