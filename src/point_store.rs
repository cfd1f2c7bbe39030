//! Ordered storage for the user's control points.

use crate::Point;
use smallvec::SmallVec;

/// The ordered list of control points.
///
/// Insertion order is the curve's winding order.
/// Drawings rarely have more than a few dozen points, so they are kept on the stack until they don't fit anymore.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStore {
    points: SmallVec<[Point; 16]>,
}

impl PointStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point at the end
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Inserts a point so that it ends up at `index`.
    ///
    /// # Panics
    /// If `index > self.len()`
    pub fn insert_at(&mut self, index: usize, point: Point) {
        assert!(
            index <= self.points.len(),
            "insertion index {} out of range for {} points",
            index,
            self.points.len()
        );
        self.points.insert(index, point);
    }

    /// Replaces the coordinates of the point at `index`.
    ///
    /// # Panics
    /// If `index >= self.len()`
    pub fn move_to(&mut self, index: usize, point: Point) {
        assert!(
            index < self.points.len(),
            "point index {} out of range for {} points",
            index,
            self.points.len()
        );
        self.points[index] = point;
    }

    /// Removes the point at the end and returns it.
    ///
    /// This is the whole undo model: it always pops the tail,
    /// even if the last change was an insertion somewhere in the middle.
    pub fn remove_last(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Finds the first point whose manhattan distance to `pos` is below `radius`
    pub fn hit_test_point(&self, pos: &Point, radius: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|p| (p - pos).lp_norm(1) < radius)
    }

    /// Removes all points
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point at `index` if it exists
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All points in winding order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over all points in winding order
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointStore {
            points: iter.into_iter().collect(),
        }
    }
}
