//! Path primitives for vector graphics.
//!
//! A path is an ordered sequence of points joined by straight segments. It carries an
//! anchor (the pivot for rotation and scaling) and its cached total length, which every
//! mutating method keeps in sync with the points.

use ahash::AHashSet;
use std::f64::consts::FRAC_PI_2;
use tracery_core::math::{Point, PointExt, clip, opposite_angle, point_on_circle};

use crate::Transform2D;
use crate::consts::{CLOSE_EPSILON, INSERT_TOLERANCE, SEGMENT_EPSILON};

/// A 2D polyline or polygon.
///
/// Mutating methods return `&mut Self` so edits can be chained:
///
/// ```
/// use tracery_geometry::Path;
/// use tracery_core::math::Point;
///
/// let mut path = Path::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
/// path.append_points([Point::new(10.0, 10.0)]).close().translate(5.0, 5.0);
///
/// assert!(path.is_closed());
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    anchor: Point,
    length: f64,
}

impl Path {
    /// Create a path from a list of points.
    ///
    /// With two or more points the anchor starts at the centroid; otherwise it is the
    /// origin.
    pub fn new(points: Vec<Point>) -> Self {
        let mut path = Self {
            points,
            anchor: Point::ZERO,
            length: 0.0,
        };
        path.recalculate_length();
        if path.points.len() > 1 {
            path.anchor = path.centroid();
        }
        path
    }

    /// Get the points in this path.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replace every point. The anchor is left where it was.
    pub fn set_points(&mut self, points: Vec<Point>) -> &mut Self {
        self.points = points;
        self.recalculate_length();
        self
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length of all segments.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The pivot used by [`rotate`](Self::rotate), [`scale`](Self::scale) and
    /// [`set_pos`](Self::set_pos).
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// First point, or the origin for an empty path.
    pub fn start(&self) -> Point {
        self.points.first().copied().unwrap_or(Point::ZERO)
    }

    /// Last point, or the origin for an empty path.
    pub fn end(&self) -> Point {
        self.points.last().copied().unwrap_or(Point::ZERO)
    }

    /// Point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn point_at_index(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Iterate over the `(start, end)` pairs of consecutive points.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// True when the first and last points coincide (within [`CLOSE_EPSILON`]).
    ///
    /// An empty path is open; a single point is its own start and end, so it is closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.distance(*last) < CLOSE_EPSILON,
            _ => false,
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Append points to the end of the path.
    pub fn append_points(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        self.points.extend(points);
        self.recalculate_length();
        self
    }

    /// Remove the last point, unless that would leave fewer than two.
    pub fn delete_end(&mut self) -> &mut Self {
        if self.points.len() > 2 {
            self.points.pop();
            self.recalculate_length();
        } else {
            tracing::debug!(len = self.points.len(), "delete_end ignored on minimal path");
        }
        self
    }

    /// Remove the point at `index`, unless that would leave fewer than two.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds and the path has more than two points.
    pub fn delete_at_index(&mut self, index: usize) -> &mut Self {
        if self.points.len() > 2 {
            self.points.remove(index);
            self.recalculate_length();
        } else {
            tracing::debug!(index, len = self.points.len(), "delete_at_index ignored on minimal path");
        }
        self
    }

    /// Insert a point before `index`. `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_at_index(&mut self, point: Point, index: usize) -> &mut Self {
        self.points.insert(index, point);
        self.recalculate_length();
        self
    }

    /// Split the segment containing arc length `length` by inserting a vertex there.
    ///
    /// `length` is clipped to `[0, length()]`. Nothing is inserted when the new vertex
    /// would fall within [`INSERT_TOLERANCE`] of the end of its segment, or exactly on
    /// its start.
    pub fn insert_at_length(&mut self, length: f64) -> &mut Self {
        let target = clip(length, 0.0, self.length);
        let mut traveled = 0.0;

        for index in 0..self.points.len().saturating_sub(1) {
            let (start, end) = (self.points[index], self.points[index + 1]);
            let segment_length = start.distance(end);
            if segment_length <= SEGMENT_EPSILON {
                continue;
            }

            if traveled + segment_length >= target {
                let point = start.lerp(end, (target - traveled) / segment_length);
                if target != traveled && point.distance(end) > INSERT_TOLERANCE {
                    self.insert_at_index(point, index + 1);
                } else {
                    tracing::debug!(length = target, "insert_at_length landed on a vertex");
                }
                return self;
            }
            traveled += segment_length;
        }
        self
    }

    /// Insert a vertex at normalized time `t` (`0.0` is the start, `1.0` the end).
    pub fn insert_at_time(&mut self, t: f64) -> &mut Self {
        let length = clip(t, 0.0, 1.0) * self.length;
        self.insert_at_length(length)
    }

    /// Remove repeated points, keeping the first occurrence of each.
    ///
    /// Points are compared exactly (`-0.0 == 0.0`; NaN points are always kept). A closed
    /// path stays closed: its closing point is set aside before deduplicating and
    /// restored afterwards.
    pub fn remove_doubles(&mut self) -> &mut Self {
        let closed = self.is_closed();
        self.open();

        let mut seen = AHashSet::with_capacity(self.points.len());
        self.points
            .retain(|point| point.is_nan() || seen.insert(point_key(*point)));

        if closed {
            self.close();
        }
        self.recalculate_length();
        self
    }

    /// Reverse the path direction. The start becomes the end.
    pub fn reverse(&mut self) -> &mut Self {
        self.points.reverse();
        self.recalculate_length();
        self
    }

    /// Close the path by repeating the first point at the end. No-op when already closed.
    pub fn close(&mut self) -> &mut Self {
        if !self.is_closed()
            && let Some(&first) = self.points.first()
        {
            self.points.push(first);
            self.recalculate_length();
        }
        self
    }

    /// Open a closed path by dropping its closing point. No-op when already open.
    pub fn open(&mut self) -> &mut Self {
        if self.points.len() > 1 && self.is_closed() {
            self.points.pop();
            self.recalculate_length();
        }
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; both are the origin for an empty path.
    pub fn bounds(&self) -> (Point, Point) {
        let Some(&first) = self.points.first() else {
            return (Point::ZERO, Point::ZERO);
        };

        self.points
            .iter()
            .fold((first, first), |(min, max), point| {
                (min.min(*point), max.max(*point))
            })
    }

    /// Mean of the distinct points, ignoring the closing point of a closed path.
    ///
    /// Runs a full deduplication pass on every call; avoid it in per-frame loops.
    pub fn centroid(&self) -> Point {
        let mut points = self.points.as_slice();
        if points.len() > 1 && self.is_closed() {
            points = &points[..points.len() - 1];
        }

        let mut seen = AHashSet::with_capacity(points.len());
        let (sum, count) = points
            .iter()
            .filter(|point| point.is_nan() || seen.insert(point_key(**point)))
            .fold((Point::ZERO, 0usize), |(sum, count), point| {
                (sum + *point, count + 1)
            });

        if count == 0 {
            Point::ZERO
        } else {
            sum / count as f64
        }
    }

    /// Point and tangent angle (radians) at arc length `length` from the start.
    ///
    /// `length` is clipped to `[0, length()]`. At the end of the path this returns the
    /// last point and the direction of the last segment. A path with fewer than two
    /// points has no segments; it returns its start and an angle of `0.0`.
    pub fn point_angle_at_length(&self, length: f64) -> (Point, f64) {
        if self.points.len() < 2 {
            return (self.start(), 0.0);
        }

        let target = clip(length, 0.0, self.length);
        if target < self.length {
            let mut traveled = 0.0;
            for (start, end) in self.segments() {
                let segment_length = start.distance(end);
                if segment_length <= SEGMENT_EPSILON {
                    continue;
                }
                if traveled + segment_length >= target {
                    let point = start.lerp(end, (target - traveled) / segment_length);
                    return (point, start.tangent_angle(end));
                }
                traveled += segment_length;
            }
        }

        (self.end(), self.last_tangent_angle())
    }

    /// Point and tangent angle at normalized time `t` (`0.0` start, `1.0` end).
    pub fn point_angle_at_time(&self, t: f64) -> (Point, f64) {
        self.point_angle_at_length(clip(t, 0.0, 1.0) * self.length)
    }

    /// End points of a line of `line_length` crossing the path at right angles, centered
    /// at arc length `length`.
    pub fn perpendicular(&self, length: f64, line_length: f64) -> (Point, Point) {
        let (position, angle) = self.point_angle_at_length(length);
        let normal = angle + FRAC_PI_2;
        let half = line_length / 2.0;
        (
            point_on_circle(position, half, normal),
            point_on_circle(position, half, opposite_angle(normal)),
        )
    }

    /// Like [`perpendicular`](Self::perpendicular), positioned by normalized time.
    pub fn perpendicular_at_time(&self, t: f64, line_length: f64) -> (Point, Point) {
        self.perpendicular(clip(t, 0.0, 1.0) * self.length, line_length)
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    /// Move every point and the anchor by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.transform(&Transform2D::translate(Point::new(dx, dy)))
    }

    /// Translate the path so that its anchor lands on `position`.
    pub fn set_pos(&mut self, position: Point) -> &mut Self {
        let offset = position - self.anchor;
        self.translate(offset.x, offset.y)
    }

    /// Rotate every point about the anchor by `angle` radians.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.transform_points(&Transform2D::rotate_about(angle, self.anchor))
    }

    /// A rotated copy; `self` is left untouched.
    pub fn rotated(&self, angle: f64) -> Path {
        let mut path = self.clone();
        path.rotate(angle);
        path
    }

    /// Scale every point away from the anchor, independently per axis.
    pub fn scale(&mut self, factor: Point) -> &mut Self {
        self.transform_points(&Transform2D::scale_about(factor, self.anchor))
    }

    /// Apply an arbitrary affine transform to every point and to the anchor.
    pub fn transform(&mut self, transform: &Transform2D) -> &mut Self {
        self.anchor = transform.transform_point(self.anchor);
        self.transform_points(transform)
    }

    /// Set the anchor point.
    pub fn set_anchor(&mut self, anchor: Point) -> &mut Self {
        self.anchor = anchor;
        self
    }

    /// Move the anchor to the current centroid.
    pub fn reset_anchor(&mut self) -> &mut Self {
        self.anchor = self.centroid();
        self
    }

    /// Map the points through `transform`, leaving the anchor where it is.
    fn transform_points(&mut self, transform: &Transform2D) -> &mut Self {
        for point in &mut self.points {
            *point = transform.transform_point(*point);
        }
        self.recalculate_length();
        self
    }

    fn recalculate_length(&mut self) {
        self.length = self.segments().map(|(start, end)| start.distance(end)).sum();
    }

    fn last_tangent_angle(&self) -> f64 {
        self.segments()
            .rev()
            .find(|(start, end)| start.distance(*end) > SEGMENT_EPSILON)
            .map(|(start, end)| start.tangent_angle(end))
            .unwrap_or(0.0)
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Hash key with exact float equality semantics (`-0.0` and `0.0` are the same key).
fn point_key(point: Point) -> (u64, u64) {
    // Adding 0.0 turns -0.0 into 0.0 and leaves every other value unchanged.
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}
