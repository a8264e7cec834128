extern crate mandelmap;
extern crate tempfile;

use mandelmap::palette::Bounds;
use mandelmap::ppm::{to_rgb_bytes, write_ppm};
use mandelmap::{Grid, RenderParams, Renderer};
use std::fs;
use std::path::Path;

fn small_renderer(parallelism: usize) -> Renderer {
    let params = RenderParams {
        parallelism,
        ..RenderParams::default()
    };
    Renderer::new(Grid::standard(4).unwrap(), params).unwrap()
}

#[test]
fn small_image_bytes_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.ppm");
    let second = dir.path().join("second.ppm");

    let renderer = small_renderer(16);
    write_ppm(&first, &renderer.render(), renderer.side()).unwrap();
    write_ppm(&second, &renderer.render(), renderer.side()).unwrap();

    let a = fs::read(&first).unwrap();
    let b = fs::read(&second).unwrap();
    assert_eq!(a, b);

    // Exact header, then sixteen pixels at three bytes each.
    assert_eq!(&a[..11], &b"P6\n4 4\n255\n"[..]);
    assert_eq!(a.len(), 11 + 48);
    assert_eq!(&a[11..], &to_rgb_bytes(&renderer.render())[..]);
}

#[test]
fn pipeline_stages_compose() {
    let renderer = small_renderer(1);
    let counts = renderer.escape_counts();
    assert_eq!(counts.len(), 16);

    let bounds = Bounds::scan(&counts);
    assert!(bounds.min <= bounds.max);

    let colors = renderer.colorize(&counts, bounds);
    assert_eq!(colors, renderer.render());
}

#[test]
fn write_ppm_surfaces_creation_errors() {
    let renderer = small_renderer(16);
    let colors = renderer.render();
    let missing = Path::new("no-such-directory").join("out.ppm");
    assert!(write_ppm(&missing, &colors, renderer.side()).is_err());
}
