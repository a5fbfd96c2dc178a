//! Simple ray tracer example.
//!
//! Renders a basic scene with spheres over a mirror floor and saves to PPM format.

use spider_renderer::{
    color_to_rgba, Camera, Color, Framebuffer, Light, Material, Plane, Projection,
    RenderConfig, Scene, Sphere, Vec3,
};
use std::f32::consts::FRAC_PI_4;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Spiderling Ray Tracer - Simple Example");
    println!("======================================");

    let (width, height) = (640, 360);

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene(width, height)?;
    println!("Scene built in {:?}", start.elapsed());

    println!("Rendering {}x{}...", width, height);

    // Render
    let start = std::time::Instant::now();
    let mut framebuffer = Framebuffer::new(width, height);
    let stats = scene.render(&mut framebuffer);

    println!("Rendered in {:?} ({})", start.elapsed(), stats);

    // Save as PPM
    let filename = "output.ppm";
    save_ppm(&framebuffer, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene(width: u32, height: u32) -> Result<Scene, Box<dyn std::error::Error>> {
    let camera = Camera::new(
        Projection::Perspective,
        Vec3::ZERO,
        1.0,
        FRAC_PI_4,
        width as f32,
        height as f32,
    )?;
    let config = RenderConfig {
        max_bounces: 4,
        ..RenderConfig::default()
    };
    let mut scene = Scene::new(camera, config);

    // Mirror floor
    scene.add_object(Plane::new(
        Vec3::new(0.0, -2.0, 0.0),
        Vec3::Y,
        Color::new(0.4, 0.4, 0.45, 1.0),
        Material::matte().with_reflectivity(0.35),
    )?);

    // Three spheres
    scene.add_object(Sphere::new(
        Vec3::new(0.0, 0.0, -12.0),
        2.0,
        Color::new(0.8, 0.1, 0.1, 1.0),
        Material::shiny(),
    )?);
    scene.add_object(Sphere::new(
        Vec3::new(-4.5, -0.5, -14.0),
        1.5,
        Color::new(0.1, 0.6, 0.2, 1.0),
        Material::matte(),
    )?);
    scene.add_object(Sphere::new(
        Vec3::new(4.5, -0.5, -14.0),
        1.5,
        Color::new(0.9, 0.9, 0.9, 1.0),
        Material::shiny().with_reflectivity(0.8),
    )?);

    scene.add_light(Light::new(Vec3::new(-8.0, 10.0, 0.0)));
    scene.add_light(Light::new(Vec3::new(8.0, 6.0, -4.0)));

    println!("Created {} objects", scene.objects().len());
    Ok(scene)
}

fn save_ppm(image: &Framebuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    // PPM rows run top to bottom; framebuffer rows run bottom to top
    for j in (0..image.height).rev() {
        for i in 0..image.width {
            let rgba = color_to_rgba(image.get(i, j));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    Ok(())
}
