//! The ray-traced scene and its recursive trace.
//!
//! Objects and lights are stored by value and only appended while the scene
//! is being built; rendering borrows the scene immutably.

use std::borrow::Cow;
use std::time::Instant;

use crate::error::SceneError;
use crate::hittable::{Hit, Hittable, SceneObject};
use crate::renderer::{clamp_color, RenderConfig, RenderStats};
use crate::{Camera, Color, Framebuffer, Light, Ray};
use spider_core::SceneDescription;

/// Camera, objects, and lights for one render.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
    config: RenderConfig,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, config: RenderConfig) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            lights: Vec::new(),
            config,
        }
    }

    /// Build a scene for a `width` x `height` raster from a description.
    pub fn from_description(
        description: &SceneDescription,
        width: u32,
        height: u32,
        config: RenderConfig,
    ) -> Result<Self, SceneError> {
        let camera = Camera::from_description(description.camera()?, width as f32, height as f32)?;
        let mut scene = Scene::new(camera, config);

        for light in &description.lights {
            scene.add_light(Light::new(light.position));
        }
        for (index, primitive) in description.primitives.iter().enumerate() {
            let object = SceneObject::from_description(primitive).map_err(|err| {
                log::warn!("Rejected {} #{}: {}", primitive.kind(), index, err);
                err
            })?;
            scene.add_object(object);
        }

        log::debug!(
            "Built scene with {} objects and {} lights",
            scene.objects.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Append an object; returns its index.
    pub fn add_object(&mut self, object: impl Into<SceneObject>) -> usize {
        self.objects.push(object.into());
        self.objects.len() - 1
    }

    /// Append a light; returns its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Nearest object hit by the ray, by linear scan.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(usize, Hit)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(index, object)| object.hit(ray).map(|hit| (index, hit)))
            .min_by(|a, b| a.1.t.total_cmp(&b.1.t))
    }

    /// Color seen along a ray.
    ///
    /// `bounce_count` is the number of reflections already taken; pass 0
    /// for camera rays.
    pub fn trace(&self, ray: &Ray, bounce_count: u32) -> Color {
        let mut stats = RenderStats::default();
        self.trace_with_stats(ray, bounce_count, &mut stats)
    }

    /// `trace`, accumulating counters into `stats`.
    pub fn trace_with_stats(&self, ray: &Ray, bounce_count: u32, stats: &mut RenderStats) -> Color {
        stats.deepest_level = stats.deepest_level.max(bounce_count + 1);

        let Some((index, hit)) = self.closest_hit(ray) else {
            return self.config.background;
        };
        let object = &self.objects[index];
        let material = object.material();
        let color = object.color();
        let eye = self.config.eye.resolve(self.camera.position);

        let mut local = Color::ZERO;
        for light in &self.lights {
            local += light.shade(hit.point, hit.normal, color, &material, eye);
            stats.light_evaluations += 1;
        }
        let local = clamp_color(local);

        if bounce_count >= self.config.max_bounces || !material.is_reflective() {
            return local;
        }

        stats.reflection_rays += 1;
        let reflected = self.trace_with_stats(
            &ray.reflected(hit.point, hit.normal),
            bounce_count + 1,
            stats,
        );
        local.lerp(reflected, material.reflectivity)
    }

    /// Camera whose viewport matches a `width` x `height` raster.
    ///
    /// Returns `None` when the raster is empty.
    fn camera_for(&self, width: u32, height: u32) -> Option<Cow<'_, Camera>> {
        let viewport = (width as f32, height as f32);
        if self.camera.viewport() == viewport {
            return Some(Cow::Borrowed(&self.camera));
        }

        let mut camera = self.camera.clone();
        match camera.set_viewport(viewport.0, viewport.1) {
            Ok(()) => {
                log::debug!(
                    "Camera viewport {:?} adjusted to {}x{}",
                    self.camera.viewport(),
                    width,
                    height
                );
                Some(Cow::Owned(camera))
            }
            Err(err) => {
                log::warn!("Nothing to render: {}", err);
                None
            }
        }
    }

    /// Fill a flat, bottom-up `width` x `height` RGBA slice.
    ///
    /// Pixels are mapped through the camera's frustum at `width` x `height`,
    /// whatever raster the camera was built for. Rows past the end of a short
    /// slice are skipped.
    pub fn render_slice(&self, frame: &mut [Color], width: u32, height: u32) -> RenderStats {
        let mut stats = RenderStats::default();
        let Some(camera) = self.camera_for(width, height) else {
            return stats;
        };

        for (j, row) in frame
            .chunks_exact_mut(width as usize)
            .take(height as usize)
            .enumerate()
        {
            for (i, pixel) in row.iter_mut().enumerate() {
                let ray = camera.make_view_ray(i as u32, j as u32);
                stats.primary_rays += 1;
                *pixel = self.trace_with_stats(&ray, 0, &mut stats);
            }
        }

        stats
    }

    /// Render every pixel of the framebuffer.
    pub fn render(&self, framebuffer: &mut Framebuffer) -> RenderStats {
        let (width, height) = (framebuffer.width, framebuffer.height);
        log::info!(
            "Rendering {}x{} ({} objects, {} lights, {} bounces)",
            width,
            height,
            self.objects.len(),
            self.lights.len(),
            self.config.max_bounces
        );

        let start = Instant::now();
        let stats = self.render_slice(framebuffer.pixels_mut(), width, height);
        log::info!("Finished rendering in {:?}: {}", start.elapsed(), stats);

        stats
    }
}
