//! Camera for view ray generation.
//!
//! Pixel `(i, j)` is sampled at its center and mapped onto the view-plane
//! rectangle `(l, r, t, b)`. `j = 0` is the bottom row.

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::Ray;
use spider_core::{CameraDescription, Projection};
use spider_math::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// Distance moved by one movement input when no explicit step is given.
pub const DEFAULT_MOVE_STEP: f32 = 5.0;

/// View-plane rectangle in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Direction of a camera movement, relative to the camera's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMove {
    Forward,
    Backward,
    Up,
    Down,
    Left,
    Right,
}

/// One frame's worth of camera input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraInput {
    /// Translate along a derived axis by `step` units
    Move(CameraMove, f32),
    /// Add to the spherical orientation angles (radians)
    Look { horizontal: f32, vertical: f32 },
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    projection: Projection,
    pub position: Vec3,
    focal_length: f32,
    vertical_fov: f32,
    width: f32,
    height: f32,
    bounds: FrustumBounds,

    // Orientation, from which direction/right/up are derived
    pub vertical_angle: f32,
    pub horizontal_angle: f32,
}

impl Camera {
    /// Create a camera for a `width` x `height` raster.
    ///
    /// Frustum bounds are fixed here: perspective uses
    /// `t = focal_length * tan(fov / 2)`, `r = t * aspect`; parallel uses half
    /// the viewport dimensions.
    pub fn new(
        projection: Projection,
        position: Vec3,
        focal_length: f32,
        vertical_fov: f32,
        width: f32,
        height: f32,
    ) -> GeometryResult<Self> {
        ensure_finite(&position.to_array(), "camera position")?;
        ensure_finite(&[focal_length], "focal length")?;
        ensure_finite(&[vertical_fov], "vertical field of view")?;

        let mut camera = Self {
            projection,
            position,
            focal_length,
            vertical_fov,
            width,
            height,
            bounds: FrustumBounds {
                left: 0.0,
                right: 0.0,
                top: 0.0,
                bottom: 0.0,
            },
            vertical_angle: 0.0,
            horizontal_angle: PI,
        };
        camera.set_viewport(width, height)?;
        Ok(camera)
    }

    /// Build a camera from a scene description.
    pub fn from_description(
        description: &CameraDescription,
        width: f32,
        height: f32,
    ) -> GeometryResult<Self> {
        Self::new(
            description.projection,
            description.position,
            description.focal_length,
            description.vertical_fov,
            width,
            height,
        )
    }

    /// Resize the raster and recompute the frustum bounds.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> GeometryResult<()> {
        if !(width >= 1.0 && height >= 1.0) || !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::EmptyViewport { width, height });
        }

        self.width = width;
        self.height = height;
        self.bounds = match self.projection {
            Projection::Perspective => {
                let top = self.focal_length * (self.vertical_fov / 2.0).tan();
                let right = top * self.aspect_ratio();
                FrustumBounds {
                    left: -right,
                    right,
                    top,
                    bottom: -top,
                }
            }
            Projection::Parallel => {
                let top = height / 2.0;
                let right = width / 2.0;
                FrustumBounds {
                    left: -right,
                    right,
                    top,
                    bottom: -top,
                }
            }
        };
        Ok(())
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn bounds(&self) -> FrustumBounds {
        self.bounds
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Raster size this camera maps pixels from.
    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Forward axis from the spherical angles.
    pub fn direction(&self) -> Vec3 {
        Vec3::new(
            self.vertical_angle.cos() * self.horizontal_angle.sin(),
            self.vertical_angle.sin(),
            self.vertical_angle.cos() * self.horizontal_angle.cos(),
        )
    }

    /// Horizontal right axis; never tilts with the vertical angle.
    pub fn right(&self) -> Vec3 {
        Vec3::new(
            (self.horizontal_angle - FRAC_PI_2).sin(),
            0.0,
            (self.horizontal_angle - FRAC_PI_2).cos(),
        )
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.direction())
    }

    /// Apply one movement or look input.
    pub fn apply_input(&mut self, input: CameraInput) {
        match input {
            CameraInput::Move(movement, step) => {
                let offset = match movement {
                    CameraMove::Forward => self.direction(),
                    CameraMove::Backward => -self.direction(),
                    CameraMove::Up => self.up(),
                    CameraMove::Down => -self.up(),
                    CameraMove::Right => self.right(),
                    CameraMove::Left => -self.right(),
                };
                self.position += offset * step;
            }
            CameraInput::Look {
                horizontal,
                vertical,
            } => {
                self.horizontal_angle += horizontal;
                self.vertical_angle += vertical;
            }
        }
    }

    /// View-plane coordinates `(tau, sigma)` of the center of pixel `(i, j)`.
    fn view_plane_point(&self, i: u32, j: u32) -> (f32, f32) {
        let b = &self.bounds;
        let sigma = b.bottom + (b.top - b.bottom) * (j as f32 + 0.5) / self.height;
        let tau = b.left + (b.right - b.left) * (i as f32 + 0.5) / self.width;
        (tau, sigma)
    }

    /// Ray through pixel `(i, j)` from the camera position.
    ///
    /// The direction is unit length.
    pub fn make_perspective_view_ray(&self, i: u32, j: u32) -> Ray {
        let (tau, sigma) = self.view_plane_point(i, j);
        let target = -self.focal_length * Vec3::Z + tau * Vec3::X + sigma * Vec3::Y;
        Ray::new(self.position, target.normalize())
    }

    /// Ray through pixel `(i, j)` along the fixed forward axis.
    ///
    /// The origin slides across the view plane instead of the direction
    /// fanning out, so there is no foreshortening.
    pub fn make_parallel_view_ray(&self, i: u32, j: u32) -> Ray {
        let (tau, sigma) = self.view_plane_point(i, j);
        let origin = self.position + tau * Vec3::X + sigma * Vec3::Y;
        Ray::new(origin, Vec3::NEG_Z)
    }

    /// Ray for pixel `(i, j)` under this camera's projection.
    pub fn make_view_ray(&self, i: u32, j: u32) -> Ray {
        match self.projection {
            Projection::Perspective => self.make_perspective_view_ray(i, j),
            Projection::Parallel => self.make_parallel_view_ray(i, j),
        }
    }
}
