use bevy::prelude::*;

/// World-space bounding box of the spawned model, merged from the mesh AABBs
/// each frame so the pointer hit test tracks the idle spin.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
    valid: bool,
}

impl Default for ModelBounds {
    fn default() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
            valid: false,
        }
    }
}

impl ModelBounds {
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Grow the box to include `point`.
    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
        self.valid = true;
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn max_extent(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Slab test of a camera ray against the box. Returns false for an
    /// invalid (never extended) box.
    pub fn ray_intersects(&self, origin: Vec3, direction: Vec3) -> bool {
        if !self.valid {
            return false;
        }

        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < 1e-8 {
                // Ray parallel to the slab: must start inside it.
                if o < lo || o > hi {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / d;
            let (t0, t1) = ((lo - o) * inv, (hi - o) * inv);
            let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }

        // Intersection must lie in front of the ray origin.
        t_max >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> ModelBounds {
        ModelBounds::from_min_max(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_center_and_size() {
        let bounds = ModelBounds::from_min_max(Vec3::new(-2.0, 0.0, -1.0), Vec3::new(2.0, 4.0, 1.0));
        assert!((bounds.center() - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-6);
        assert!((bounds.size() - Vec3::new(4.0, 4.0, 2.0)).length() < 1e-6);
        assert!((bounds.max_extent() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_extend_accumulates() {
        let mut bounds = ModelBounds::default();
        assert!(!bounds.is_valid());
        bounds.extend(Vec3::new(1.0, 2.0, 3.0));
        bounds.extend(Vec3::new(-1.0, 0.0, 0.0));
        assert!(bounds.is_valid());
        assert!((bounds.min - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((bounds.max - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_ray_hits_box_head_on() {
        let bounds = unit_box();
        assert!(bounds.ray_intersects(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_ray_misses_offset_box() {
        let bounds = unit_box();
        assert!(!bounds.ray_intersects(Vec3::new(5.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_ray_behind_origin_misses() {
        let bounds = unit_box();
        assert!(!bounds.ray_intersects(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_ray_from_inside_hits() {
        let bounds = unit_box();
        assert!(bounds.ray_intersects(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_invalid_bounds_never_hit() {
        let bounds = ModelBounds::default();
        assert!(!bounds.ray_intersects(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0)));
    }
}
