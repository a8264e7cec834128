extern crate mandelmap;

use mandelmap::ppm::write_ppm;
use mandelmap::render::SIDE;
use mandelmap::{Grid, RenderParams, Renderer};
use std::time::Instant;

const OUTPUT: &str = "out.ppm";

fn main() {
    let grid = Grid::standard(SIDE).expect("the standard window is well-formed");
    let renderer =
        Renderer::new(grid, RenderParams::default()).expect("16 workers split the standard grid");

    let start = Instant::now();
    let colors = renderer.render();
    println!("elapsed: {:?}", start.elapsed());

    if let Err(e) = write_ppm(OUTPUT, &colors, renderer.side()) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
