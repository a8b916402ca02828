pub mod obj;
pub mod preset;

use std::sync::Arc;

use geometry::ray::Ray;
use light::DeltaLight;
use material::Material;
use radiometry::color::Color;
use shape::{Interaction, Shape};

/// A renderable object: a shape paired with its material. Triangles of one mesh share a
/// material through the `Arc`.
#[derive(Clone)]
pub struct Primitive {
    pub shape: Arc<dyn Shape>,
    pub mtl: Arc<Material>,
}

impl Primitive {
    pub fn new(shape: Arc<dyn Shape>, mtl: Arc<Material>) -> Self {
        Primitive { shape, mtl }
    }
    pub fn from_raw<S: 'static>(shape: S, mtl: Material) -> Self
    where
        S: Shape,
    {
        Primitive::new(Arc::new(shape), Arc::new(mtl))
    }
}

impl std::fmt::Debug for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Primitive[{} / {}]",
            self.shape.summary(),
            self.mtl.summary()
        )
    }
}

/// Everything the tracer reads: an ordered collection of primitives and lights plus the global
/// shading parameters. Built once before rendering and read-only afterwards.
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub lights: Vec<DeltaLight>,
    pub ambient: Color,
    pub background: Color,
    pub exposure: f32,
    pub max_depth: u32,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self {
            primitives,
            lights: vec![],
            ambient: Color::gray(0.1),
            background: Color::black(),
            exposure: 1.0,
            max_depth: 5,
        }
    }

    pub fn with_lights(self, lights: Vec<DeltaLight>) -> Self {
        Self { lights, ..self }
    }

    pub fn with_ambient(self, ambient: Color) -> Self {
        Self { ambient, ..self }
    }

    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    pub fn with_exposure(self, exposure: f32) -> Self {
        Self { exposure, ..self }
    }

    pub fn with_max_depth(self, max_depth: u32) -> Self {
        Self { max_depth, ..self }
    }

    /// Finds the nearest intersection along `ray` over all primitives, or `None`.
    ///
    /// Every hit found tightens `ray.t_max` to that hit's t, so each later primitive is only
    /// tested against the closest distance so far; whatever survives the scan is the global
    /// nearest hit.
    pub fn intersect(&self, ray: &mut Ray) -> Option<(Interaction, &Arc<Material>)> {
        let mut best = None;
        for prim in self.primitives.iter() {
            if let Some(hit) = prim.shape.intersect(ray) {
                ray.set_extent(hit.ray_t);
                best = Some((hit, &prim.mtl));
            }
        }
        best
    }

    /// True iff any primitive blocks the ray within its extent. Used for shadow rays, where
    /// the extent is the distance to the light.
    pub fn occludes(&self, ray: &Ray) -> bool {
        self.primitives.iter().any(|prim| prim.shape.occludes(ray))
    }
}
