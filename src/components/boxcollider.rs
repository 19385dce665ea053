use raylib::prelude::Vector2;

/// Axis-aligned bounding box relative to an object's position.
///
/// `offset` is the corner of the box measured from the position, `size` its
/// extent. Terrain grows its collider in place when a run gets longer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size anchored at the position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2 {
                x: width,
                y: height,
            },
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Returns (min, max) of the collider AABB for a given object position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2 {
            x: p0.x.min(p1.x),
            y: p0.y.min(p1.y),
        };
        let max = Vector2 {
            x: p0.x.max(p1.x),
            y: p0.y.max(p1.y),
        };
        (min, max)
    }

    /// AABB vs AABB overlap test against another collider at a different position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn test_aabb_follows_position() {
        let collider = BoxCollider::new(2.0, 1.5);
        let (min, max) = collider.aabb(v(3.0, -1.0));
        assert_eq!((min.x, min.y), (3.0, -1.0));
        assert_eq!((max.x, max.y), (5.0, 0.5));
    }

    #[test]
    fn test_aabb_normalizes_negative_size() {
        let collider = BoxCollider::new(-1.0, -1.0);
        let (min, max) = collider.aabb(v(0.0, 0.0));
        assert_eq!((min.x, min.y), (-1.0, -1.0));
        assert_eq!((max.x, max.y), (0.0, 0.0));
    }

    #[test]
    fn test_overlaps_with_offset() {
        let a = BoxCollider::new(1.0, 1.0);
        let b = BoxCollider::new(10.0, 3.0).with_offset(v(1.0, 0.0));
        assert!(a.overlaps(v(1.5, 0.5), &b, v(0.0, 0.0)));
        assert!(!a.overlaps(v(-0.5, 0.5), &b, v(0.0, 0.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoxCollider::new(1.0, 1.0);
        let b = BoxCollider::new(1.0, 1.0);
        assert!(!a.overlaps(v(0.0, 0.0), &b, v(1.0, 0.0)));
    }

    #[test]
    fn test_contains_point() {
        let collider = BoxCollider::new(1.0, 1.0);
        assert!(collider.contains_point(v(0.0, 0.0), v(0.5, 1.0)));
        assert!(!collider.contains_point(v(0.0, 0.0), v(1.1, 0.5)));
    }
}
