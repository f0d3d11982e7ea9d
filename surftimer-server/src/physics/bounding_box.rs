use glam::DVec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl BoundingBox {
    // zone corners come out of map data in no particular order, so take the
    // per-axis extrema instead of trusting either corner to be the minimum
    pub fn from_corners(a: DVec3, b: DVec3) -> BoundingBox {
        BoundingBox {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_y: a.y.min(b.y),
            max_y: a.y.max(b.y),
            min_z: a.z.min(b.z),
            max_z: a.z.max(b.z),
        }
    }

    /// Boundary-inclusive containment test on all three axes.
    pub fn contains(&self, point: DVec3) -> bool {
        (self.min_x <= point.x && point.x <= self.max_x)
            && (self.min_y <= point.y && point.y <= self.max_y)
            && (self.min_z <= point.z && point.z <= self.max_z)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::physics::bounding_box::BoundingBox;

    #[test]
    fn test_contains_interior_point() {
        let bounds = BoundingBox::from_corners(DVec3::ZERO, DVec3::new(10.0, 10.0, 10.0));
        assert!(bounds.contains(DVec3::new(5.0, 5.0, 5.0)));
    }

    #[test]
    fn test_excludes_point_outside_one_axis() {
        let bounds = BoundingBox::from_corners(DVec3::ZERO, DVec3::new(10.0, 10.0, 10.0));
        assert!(!bounds.contains(DVec3::new(11.0, 5.0, 5.0)));
        assert!(!bounds.contains(DVec3::new(5.0, -0.5, 5.0)));
        assert!(!bounds.contains(DVec3::new(5.0, 5.0, 10.5)));
    }

    #[test]
    fn test_corners_themselves_are_inside() {
        let a = DVec3::ZERO;
        let b = DVec3::new(10.0, 10.0, 10.0);
        let bounds = BoundingBox::from_corners(a, b);
        assert!(bounds.contains(a));
        assert!(bounds.contains(b));
    }

    #[test]
    fn test_corner_order_is_irrelevant() {
        let point = DVec3::new(-3.0, 2.0, 7.5);
        let a = DVec3::new(-10.0, 8.0, 0.0);
        let b = DVec3::new(4.0, -1.0, 12.0);
        assert_eq!(
            BoundingBox::from_corners(a, b).contains(point),
            BoundingBox::from_corners(b, a).contains(point)
        );
        assert!(BoundingBox::from_corners(b, a).contains(point));
    }
}
