use crate::DVec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized on construction, so every intersection
/// routine can rely on `|direction| == 1`. A degenerate (zero-length)
/// direction is stored as `DVec3::ZERO` and reported by [`Ray::is_degenerate`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray starting at `from` and aimed at `to`.
    pub fn between(from: DVec3, to: DVec3) -> Self {
        Self::new(from, to - from)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// True when the ray was built from a zero-length direction.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == DVec3::ZERO
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}
