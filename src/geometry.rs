//! Integer 2-D geometry: points and half-open rectangles.
//!
//! Every coordinate in this module is an `i64`. There is no notion of a
//! continuous plane here: vertices live at lattice points, and rectangles
//! are always `[left, right) x [bottom, top)`, half-open on both axes. That
//! choice of half-open bounds is load-bearing, it is what lets the k-d
//! partitioner split a rectangle into two children that exactly tile it,
//! with no overlap and no gap, even when the split lands on a degenerate
//! (zero-width) boundary.

/// A point in the integer plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

/// An axis-aligned rectangle, half-open on both axes: `[x, x+w) x [y, y+h)`.
///
/// `w` and `h` are never negative for a rectangle built through the public
/// API, but nothing here asserts it: the k-d partitioner deliberately
/// builds zero-width/zero-height children when a split pivot coincides with
/// the parent's own edge, and `contains` still behaves correctly for those
/// (a zero-width rectangle contains nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rectangle {
    pub fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Rectangle { x, y, w, h }
    }

    /// A zero-size rectangle located at `p`.
    pub fn at_point(p: Point) -> Self {
        Rectangle::new(p.x, p.y, 0, 0)
    }

    pub fn left(&self) -> i64 {
        self.x
    }

    pub fn bottom(&self) -> i64 {
        self.y
    }

    pub fn right(&self) -> i64 {
        self.left() + self.w
    }

    pub fn top(&self) -> i64 {
        self.bottom() + self.h
    }

    /// Integer midpoint, truncating towards zero (as integer division
    /// always does on non-negative spans).
    pub fn center(&self) -> Point {
        Point::new(self.left() + self.w / 2, self.bottom() + self.h / 2)
    }

    /// Grows the rectangle in place so that it contains `p`, preserving the
    /// half-open contract: `right` becomes `p.x + 1` rather than `p.x` when
    /// `p` falls on or past the current right edge, so that `contains(p)`
    /// holds immediately afterwards. Symmetric on the y axis.
    pub fn encapsulate(&mut self, p: Point) {
        if self.left() > p.x {
            self.w += self.left() - p.x;
            self.x = p.x;
        } else if p.x >= self.right() {
            self.w += p.x - self.right() + 1;
        }
        if self.bottom() > p.y {
            self.h += self.bottom() - p.y;
            self.y = p.y;
        } else if p.y >= self.top() {
            self.h += p.y - self.top() + 1;
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.bottom() && p.y < self.top()
    }

    /// The minimal rectangle containing every point in `points`, or `None`
    /// if the sequence is empty.
    pub fn encapsulate_all(points: impl IntoIterator<Item = Point>) -> Option<Rectangle> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Rectangle::at_point(first);
        for p in points {
            bounds.encapsulate(p);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rectangle::new(0, 0, 4, 4);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(3, 3)));
        assert!(!rect.contains(Point::new(4, 0)));
        assert!(!rect.contains(Point::new(0, 4)));
        assert!(!rect.contains(Point::new(-1, 0)));
    }

    #[test]
    fn encapsulate_grows_leftward_and_downward() {
        let mut rect = Rectangle::new(0, 0, 4, 4);
        rect.encapsulate(Point::new(-2, -1));
        assert_eq!(rect, Rectangle::new(-2, -1, 6, 5));
    }

    #[test]
    fn encapsulate_grows_rightward_with_plus_one() {
        let mut rect = Rectangle::new(0, 0, 4, 4);
        rect.encapsulate(Point::new(4, 0));
        assert_eq!(rect.right(), 5);
        assert!(rect.contains(Point::new(4, 0)));
    }

    #[test]
    fn encapsulate_all_empty_is_none() {
        assert!(Rectangle::encapsulate_all(std::iter::empty()).is_none());
    }

    #[test]
    fn encapsulate_all_seeds_zero_size_rect_at_first_point() {
        let bounds = Rectangle::encapsulate_all([Point::new(5, 5)]).unwrap();
        assert_eq!(bounds, Rectangle::new(5, 5, 0, 0));
    }

    #[test]
    fn center_truncates() {
        let rect = Rectangle::new(0, 0, 5, 5);
        assert_eq!(rect.center(), Point::new(2, 2));
    }

    proptest! {
        #[test]
        fn encapsulate_round_trip(
            x in -1000i64..1000, y in -1000i64..1000,
            w in 0i64..50, h in 0i64..50,
            px in -1000i64..1000, py in -1000i64..1000,
        ) {
            let mut rect = Rectangle::new(x, y, w, h);
            let p = Point::new(px, py);
            rect.encapsulate(p);
            prop_assert!(rect.contains(p));
        }

        #[test]
        fn encapsulate_all_contains_every_point(
            pts in proptest::collection::vec((-1000i64..1000, -1000i64..1000), 1..50)
        ) {
            let points: Vec<Point> = pts.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let bounds = Rectangle::encapsulate_all(points.iter().copied()).unwrap();
            for p in &points {
                prop_assert!(bounds.contains(*p));
            }
        }
    }
}
