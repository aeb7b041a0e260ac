use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

use crate::{Real, ApproxEq, Zero, Vec3, MediumHandle};

/// 3D Ray
///
/// `t_max` bounds the valid part of the ray, intersection routines take the ray by mutable reference to tighten it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray<T: Real> {
    pub orig   : Vec3<T>,
    pub dir    : Vec3<T>,
    pub t_max  : T,
    pub time   : T,
    pub medium : Option<MediumHandle>,
}

impl<T: Real> Ray<T> {
    /// Create a new ray from an origin and a direction, implicitly sets `t_max` to infinity, `time` to 0 and no medium
    #[inline]
    #[must_use]
    pub fn new(orig: Vec3<T>, dir: Vec3<T>) -> Self {
        Self { orig, dir, t_max: T::infinity(), time: T::zero(), medium: None }
    }

    /// Create a new ray, setting all of its parameters
    #[inline]
    #[must_use]
    pub fn with_params(orig: Vec3<T>, dir: Vec3<T>, t_max: T, time: T, medium: Option<MediumHandle>) -> Self {
        Self { orig, dir, t_max, time, medium }
    }

    /// Get the point at parameter `t` along the ray, `t` is not checked against `t_max`
    #[inline]
    #[must_use]
    pub fn at(self, t: T) -> Vec3<T> {
        self.orig + self.dir * t
    }

    /// Check if the parameter `t` lies in the valid part of the ray
    #[inline]
    #[must_use]
    pub fn is_on_ray(self, t: T) -> bool {
        t >= T::zero() && t <= self.t_max
    }
}

impl<T: Real> Default for Ray<T> {
    /// Ray at the origin, pointing along the x-axis
    fn default() -> Self {
        Self::new(Vec3::zero(), Vec3::new(T::one(), T::zero(), T::zero()))
    }
}

impl<T: Real> ApproxEq for Ray<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) &&
        self.dir.is_close_to(rhs.dir, epsilon) &&
        (self.t_max == rhs.t_max || self.t_max.is_close_to(rhs.t_max, epsilon)) &&
        self.time.is_close_to(rhs.time, epsilon) &&
        self.medium == rhs.medium
    }
}

impl<T: Real + Display> Display for Ray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ o: {}, d: {}, t_max: {}, time: {} }}", self.orig, self.dir, self.t_max, self.time))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// Auxiliary rays, offset by 1 sample in x and y on the image plane
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Differentials<T: Real> {
    pub rx_origin    : Vec3<T>,
    pub ry_origin    : Vec3<T>,
    pub rx_direction : Vec3<T>,
    pub ry_direction : Vec3<T>,
}

/// Ray with optional auxiliary rays, used to estimate the footprint of the ray for texture filtering
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayDifferential<T: Real> {
    pub ray           : Ray<T>,
    pub differentials : Option<Differentials<T>>,
}

impl<T: Real> RayDifferential<T> {
    /// Create a new ray differential without differentials, see [`Ray::new`]
    #[inline]
    #[must_use]
    pub fn new(orig: Vec3<T>, dir: Vec3<T>) -> Self {
        Self::from(Ray::new(orig, dir))
    }

    /// Create a new ray differential without differentials, see [`Ray::with_params`]
    #[inline]
    #[must_use]
    pub fn with_params(orig: Vec3<T>, dir: Vec3<T>, t_max: T, time: T, medium: Option<MediumHandle>) -> Self {
        Self::from(Ray::with_params(orig, dir, t_max, time, medium))
    }

    /// Create a ray differential from a ray and its auxiliary rays
    #[inline]
    #[must_use]
    pub fn with_differentials(ray: Ray<T>, differentials: Differentials<T>) -> Self {
        Self { ray, differentials: Some(differentials) }
    }

    /// Attach auxiliary rays, replacing any existing ones
    #[inline]
    pub fn set_differentials(&mut self, differentials: Differentials<T>) {
        self.differentials = Some(differentials);
    }

    /// Check if the ray has auxiliary rays
    #[inline]
    pub fn has_differentials(&self) -> bool {
        self.differentials.is_some()
    }

    /// Rescale the offsets of the auxiliary rays to the main ray by `s`, e.g. for a different sample spacing.
    ///
    /// Does nothing when the ray has no auxiliary rays, a scale of 1 leaves them bit-exact.
    pub fn scale_differentials(&mut self, s: T) {
        if s == T::one() {
            return;
        }
        let Ray { orig, dir, .. } = self.ray;
        if let Some(diff) = &mut self.differentials {
            diff.rx_origin = orig + (diff.rx_origin - orig) * s;
            diff.ry_origin = orig + (diff.ry_origin - orig) * s;
            diff.rx_direction = dir + (diff.rx_direction - dir) * s;
            diff.ry_direction = dir + (diff.ry_direction - dir) * s;
        }
    }
}

impl<T: Real> Default for RayDifferential<T> {
    fn default() -> Self {
        Self::from(Ray::default())
    }
}

impl<T: Real> From<Ray<T>> for RayDifferential<T> {
    fn from(ray: Ray<T>) -> Self {
        Self { ray, differentials: None }
    }
}

impl<T: Real> Deref for RayDifferential<T> {
    type Target = Ray<T>;

    fn deref(&self) -> &Ray<T> {
        &self.ray
    }
}

impl<T: Real> DerefMut for RayDifferential<T> {
    fn deref_mut(&mut self) -> &mut Ray<T> {
        &mut self.ray
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn differentials() -> Differentials<f32> {
        Differentials {
            rx_origin:    Vec3::new(1.0, 0.0, 0.0),
            ry_origin:    Vec3::new(0.0, 1.0, 0.0),
            rx_direction: Vec3::new(0.1, 0.0, 1.0),
            ry_direction: Vec3::new(0.0, 0.1, 1.0),
        }
    }

    #[test]
    fn defaults() {
        let ray = Ray::<f32>::default();
        assert_eq!(ray.orig, Vec3::zero());
        assert_eq!(ray.dir, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.t_max, f32::INFINITY);
        assert_eq!(ray.time, 0.0);
        assert_eq!(ray.medium, None);

        let ray = Ray::new(Vec3::new(1.0f64, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(ray.t_max, f64::INFINITY);
        assert!(ray.is_on_ray(1e30));
        assert!(!ray.is_on_ray(-1.0));
    }

    #[test]
    fn evaluate() {
        let medium = MediumHandle::new(3);
        let ray = Ray::with_params(Vec3::new(1.0f32, 2.0, 3.0), Vec3::new(0.0, 2.0, 0.0), 10.0, 0.5, medium);
        assert_eq!(ray.at(0.0), ray.orig);
        assert_eq!(ray.at(1.5), Vec3::new(1.0, 5.0, 3.0));
        assert_eq!(ray.at(20.0), Vec3::new(1.0, 42.0, 3.0));
        assert!(ray.is_on_ray(10.0));
        assert!(!ray.is_on_ray(10.5));
        assert_eq!(ray.medium, medium);
        assert_eq!(ray.time, 0.5);
    }

    #[test]
    fn tighten_t_max() {
        fn hit(ray: &mut Ray<f32>, t: f32) -> bool {
            if ray.is_on_ray(t) {
                ray.t_max = t;
                true
            } else {
                false
            }
        }

        let mut ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0));
        assert!(hit(&mut ray, 5.0));
        assert!(!hit(&mut ray, 7.0));
        assert!(hit(&mut ray, 2.0));
        assert_eq!(ray.t_max, 2.0);

        let mut ray_diff = RayDifferential::from(ray);
        assert!(hit(&mut ray_diff, 1.0));
        assert_eq!(ray_diff.t_max, 1.0);
    }

    #[test]
    fn from_ray() {
        let ray = Ray::with_params(Vec3::new(1.0f32, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0), 4.0, 1.0, MediumHandle::new(1));
        let ray_diff = RayDifferential::from(ray);
        assert!(!ray_diff.has_differentials());
        assert_eq!(ray_diff.ray, ray);
        assert_eq!(ray_diff.at(1.0), Vec3::new(1.0, 2.0, 4.0));

        let ray_diff = RayDifferential::<f32>::new(Vec3::zero(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(*ray_diff, Ray::default());
        assert_eq!(RayDifferential::<f32>::default(), ray_diff);
    }

    #[test]
    fn scale_differentials() {
        let mut ray_diff = RayDifferential::with_differentials(Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0)), differentials());
        assert!(ray_diff.has_differentials());

        ray_diff.scale_differentials(1.0);
        assert_eq!(ray_diff.differentials, Some(differentials()));

        let mut offset = RayDifferential::with_differentials(Ray::new(Vec3::new(0.1, 0.7, 3.3), Vec3::new(0.0, 0.0, 1.0)), differentials());
        offset.scale_differentials(1.0);
        assert_eq!(offset.differentials, Some(differentials()));

        ray_diff.scale_differentials(0.5);
        let diff = ray_diff.differentials.unwrap();
        assert_eq!(diff.rx_origin, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(diff.ry_origin, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(diff.rx_direction, Vec3::new(0.05, 0.0, 1.0));
        assert_eq!(diff.ry_direction, Vec3::new(0.0, 0.05, 1.0));
        assert!(ray_diff.has_differentials());
    }

    #[test]
    fn scale_without_differentials() {
        let mut ray_diff = RayDifferential::new(Vec3::new(1.0f32, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
        ray_diff.scale_differentials(0.25);
        assert!(!ray_diff.has_differentials());

        ray_diff.set_differentials(differentials());
        assert!(ray_diff.has_differentials());
    }

    #[test]
    fn approx() {
        let a = Ray::new(Vec3::new(1.0f32, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let b = Ray::new(Vec3::new(1.0005, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(a.is_close_to(b, 1e-3));
        assert!(!a.is_close_to(b, 1e-4));
        assert!(!a.is_close_to(Ray { medium: MediumHandle::new(2), ..a }, 1e-3));
        assert_eq!(a.to_string(), "{ o: [ 1, 0, 0 ], d: [ 0, 1, 0 ], t_max: inf, time: 0 }");
    }
}
