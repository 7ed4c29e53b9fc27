extern crate nalgebra as na;

use std::f32::consts::PI;
use std::fs;

use na::Vector3;
use spheretrace::output::write_ppm;
use spheretrace::scene::reference_scene;
use spheretrace::{render, Material, RenderConfig, Scene, Sphere};

const HEADER: &[u8] = b"P6\n100 75\n255\n";

fn config() -> RenderConfig {
    RenderConfig {
        width: 100,
        height: 75,
        fov: PI / 2.0,
        camera: Vector3::zeros(),
    }
}

fn render_to_bytes(scene: &Scene, name: &str) -> Vec<u8> {
    let framebuffer = render(scene, &config()).unwrap();
    let path = std::env::temp_dir().join(format!("spheretrace-{}-{}.ppm", name, std::process::id()));
    write_ppm(&framebuffer, &path).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();
    bytes
}

fn pixel(bytes: &[u8], x: usize, y: usize) -> &[u8] {
    let offset = HEADER.len() + (x + y * 100) * 3;
    &bytes[offset..offset + 3]
}

#[test]
fn single_sphere_renders_to_ppm() {
    let ivory = Material::new(0.4, 0.4, 0.3);
    let scene = Scene::new(vec![Sphere::new(Vector3::new(0.0, 0.0, -16.0), 2.0, ivory)]);
    let bytes = render_to_bytes(&scene, "single");

    assert_eq!(&bytes[..HEADER.len()], HEADER);
    assert_eq!(bytes.len(), HEADER.len() + 100 * 75 * 3);
    assert_eq!(pixel(&bytes, 50, 37), &[102, 102, 77]);
    assert_eq!(pixel(&bytes, 0, 0), &[51, 178, 204]);
}

#[test]
fn empty_scene_writes_pure_background() {
    let bytes = render_to_bytes(&Scene::default(), "empty");
    assert_eq!(bytes.len(), HEADER.len() + 100 * 75 * 3);
    for triple in bytes[HEADER.len()..].chunks(3) {
        assert_eq!(triple, &[51, 178, 204]);
    }
}

#[test]
fn reference_scene_shows_both_materials() {
    let bytes = render_to_bytes(&reference_scene(), "reference");
    let body = &bytes[HEADER.len()..];
    let ivory = [102u8, 102, 77];
    let red = [77u8, 26, 26];
    assert!(body.chunks(3).any(|p| p == ivory));
    assert!(body.chunks(3).any(|p| p == red));
    assert!(body.chunks(3).any(|p| p == [51, 178, 204]));
}
