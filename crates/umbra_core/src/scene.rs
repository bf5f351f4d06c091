//! Distance field aggregate over a list of spheres.
//!
//! The scene is a plain linear scan: it targets a few tens of primitives,
//! where a spatial index would cost more than it saves.

use umbra_math::Vec3;

use crate::material::Material;
use crate::sphere::Sphere;

/// Closest surface to a query point.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceQuery<'a> {
    /// Unsigned distance to the closest sphere surface
    pub distance: f64,
    /// Outward unit normal of the closest sphere at the query point
    pub normal: Vec3,
    /// Material of the closest sphere
    pub material: &'a Material,
}

/// An ordered, append-only collection of spheres.
///
/// Built once before rendering and shared read-only between workers.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sphere. Insertion order decides ties in distance queries.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene has no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Distance from `point` to the nearest surface.
    ///
    /// Returns `f64::MAX` for an empty scene.
    pub fn distance(&self, point: Vec3) -> f64 {
        self.spheres
            .iter()
            .map(|s| s.signed_distance(point).abs())
            .fold(f64::MAX, |min, d| if d < min { d } else { min })
    }

    /// Distance, normal and material of the nearest surface.
    ///
    /// Equidistant spheres resolve to the first one added. Returns `None`
    /// only when the scene is empty.
    pub fn nearest_surface(&self, point: Vec3) -> Option<SurfaceQuery<'_>> {
        let mut closest: Option<(&Sphere, f64)> = None;
        for sphere in &self.spheres {
            let d = sphere.signed_distance(point).abs();
            match closest {
                Some((_, min)) if d >= min => {}
                _ => closest = Some((sphere, d)),
            }
        }

        closest.map(|(sphere, distance)| SurfaceQuery {
            distance,
            normal: sphere.normal_at(point),
            material: sphere.material(),
        })
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            spheres: iter.into_iter().collect(),
        }
    }
}

impl Extend<Sphere> for Scene {
    fn extend<I: IntoIterator<Item = Sphere>>(&mut self, iter: I) {
        self.spheres.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn diffuse(albedo: f64) -> Material {
        Material::lambertian(0.5, Color::splat(albedo), Color::ZERO).unwrap()
    }

    #[test]
    fn test_single_sphere_matches_sphere_distance() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 1.5, diffuse(0.5)).unwrap();
        let scene: Scene = std::iter::once(sphere.clone()).collect();

        for p in [
            Vec3::ZERO,
            Vec3::new(1.0, 2.0, 3.5),
            Vec3::new(-4.0, 7.0, 1.0),
        ] {
            assert_eq!(scene.distance(p), sphere.signed_distance(p).abs());
        }
    }

    #[test]
    fn test_distance_takes_closest_and_abs() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(-5.0, 0.0, 0.0), 1.0, diffuse(0.1)).unwrap());
        scene.add_sphere(Sphere::new(Vec3::new(5.0, 0.0, 0.0), 2.0, diffuse(0.2)).unwrap());

        assert!((scene.distance(Vec3::new(2.0, 0.0, 0.0)) - 1.0).abs() < 1e-12);
        // Inside the second sphere the magnitude is used
        assert!((scene.distance(Vec3::new(5.5, 0.0, 0.0)) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_surface() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, -100.0, 0.0), 100.0, diffuse(0.1)).unwrap());
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 3.0, 0.0), 1.0, diffuse(0.9)).unwrap());

        let hit = scene.nearest_surface(Vec3::new(0.0, 0.5, 0.0)).unwrap();
        assert!((hit.distance - 0.5).abs() < 1e-12);
        assert!((hit.normal - Vec3::Y).length() < 1e-12);
        assert_eq!(hit.material, &diffuse(0.1));
    }

    #[test]
    fn test_nearest_surface_tie_breaks_on_insertion_order() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(-2.0, 0.0, 0.0), 1.0, diffuse(0.1)).unwrap());
        scene.add_sphere(Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0, diffuse(0.9)).unwrap());

        let hit = scene.nearest_surface(Vec3::ZERO).unwrap();
        assert_eq!(hit.material, &diffuse(0.1));
        assert_eq!(hit.normal, Vec3::X);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.distance(Vec3::ZERO), f64::MAX);
        assert!(scene.nearest_surface(Vec3::ZERO).is_none());
    }
}
