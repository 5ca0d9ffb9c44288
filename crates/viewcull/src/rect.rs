//! Axis-aligned rectangles in a shared coordinate space.

use bytemuck::{Pod, Zeroable};

/// An axis-aligned rectangle.
///
/// Stored as its four edges, so edge comparisons run on exactly the values
/// the rect was built from. `#[repr(C)]` so a slice of rects can be uploaded
/// as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// A zero-sized rect at the origin. Bounds of a node with nothing to draw.
    pub const EMPTY: Self = Self::from_edges(0.0, 0.0, 0.0, 0.0);

    /// Creates a rectangle from its origin and size.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    /// Creates a rectangle from its four edges.
    #[must_use]
    pub const fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the horizontal extent.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the vertical extent.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns true if the rect covers no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Returns true if two rectangles overlap with non-zero area.
    ///
    /// Edges are exclusive: rects that only share an edge do not intersect.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Returns true if `other` lies entirely inside this rectangle.
    ///
    /// Edges are inclusive: a rect contains itself.
    #[inline]
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Returns the smallest rect enclosing both. Empty rects contribute nothing.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }

        Self::from_edges(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(-10.0, -10.0, 120.0, 120.0);

        assert_eq!(rect, Rect::from_edges(-10.0, -10.0, 110.0, 110.0));
        assert_eq!(rect.width(), 120.0);
        assert_eq!(rect.height(), 120.0);
        assert!(!rect.is_empty());
        assert!(Rect::EMPTY.is_empty());
    }

    #[test]
    fn test_intersects_is_edge_exclusive() {
        let view = Rect::from_edges(0.0, 0.0, 100.0, 100.0);

        // Touching the right edge exactly
        assert!(!Rect::from_edges(100.0, 0.0, 150.0, 50.0).intersects(&view));
        // Touching the bottom edge exactly
        assert!(!Rect::from_edges(0.0, 100.0, 50.0, 150.0).intersects(&view));
        // One unit of overlap
        assert!(Rect::from_edges(99.0, 0.0, 150.0, 50.0).intersects(&view));
        assert!(Rect::from_edges(-10.0, -10.0, 110.0, 110.0).intersects(&view));
    }

    #[test]
    fn test_edges_survive_construction() {
        // None of these edges is exact in f32, and `r - l` then `l + w`
        // does not round-trip for the view's right and bottom.
        let view = Rect::from_edges(-5.1, -4.9, 10.3, 7.7);

        assert_eq!(view.right, 10.3);
        assert_eq!(view.bottom, 7.7);

        let touching = [
            Rect::from_edges(10.3, 0.0, 15.3, 1.0),
            Rect::from_edges(-10.0, 0.0, -5.1, 1.0),
            Rect::from_edges(0.0, -10.0, 1.0, -4.9),
            Rect::from_edges(0.0, 7.7, 1.0, 12.9),
        ];
        for rect in touching {
            assert!(!rect.intersects(&view), "{rect:?} only shares an edge");
            assert!(!view.intersects(&rect), "{rect:?} only shares an edge");
        }

        assert!(view.contains_rect(&view));
        assert!(view.contains_rect(&Rect::from_edges(0.0, 0.0, 10.3, 7.7)));
        assert!(view.contains_rect(&Rect::from_edges(-5.1, -4.9, 0.0, 0.0)));
    }

    #[test]
    fn test_contains_rect_is_symmetric_per_edge() {
        let view = Rect::from_edges(0.0, 0.0, 100.0, 100.0);

        assert!(view.contains_rect(&view));
        assert!(view.contains_rect(&Rect::from_edges(10.0, 10.0, 50.0, 50.0)));
        assert!(!view.contains_rect(&Rect::from_edges(10.0, 10.0, 50.0, 101.0)));
        assert!(!view.contains_rect(&Rect::from_edges(-1.0, 10.0, 50.0, 50.0)));
        assert!(!view.contains_rect(&Rect::from_edges(10.0, -1.0, 50.0, 50.0)));
        assert!(!view.contains_rect(&Rect::from_edges(10.0, 10.0, 101.0, 50.0)));
    }

    #[test]
    fn test_union_skips_empty() {
        let a = Rect::from_edges(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_edges(20.0, -5.0, 30.0, 5.0);

        assert_eq!(a.union(&Rect::EMPTY), a);
        assert_eq!(Rect::EMPTY.union(&b), b);
        assert_eq!(a.union(&b), Rect::from_edges(0.0, -5.0, 30.0, 10.0));
    }

    #[test]
    fn test_rect_is_pod() {
        let rect = Rect::from_edges(1.0, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&rect));

        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
