mod cli_options;
mod render;
mod whitted;

use itertools::Itertools;

fn main() {
    env_logger::init();

    let options = match cli_options::parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: {}", cli_options::CliOptions::message());
            std::process::exit(1);
        }
    };

    let aspect_ratio = options.width as f32 / options.height as f32;
    let (scene, camera) = match scene::preset::by_name(&options.scene_name, aspect_ratio) {
        Some(pair) => pair,
        None => {
            eprintln!(
                "unknown scene '{}', expected one of: {}",
                options.scene_name,
                scene::preset::names().iter().join(", ")
            );
            std::process::exit(1);
        }
    };
    log::info!(
        "rendering '{}' at {}x{}: {} primitives, {} lights, depth limit {}",
        options.scene_name,
        options.width,
        options.height,
        scene.primitives.len(),
        scene.lights.len(),
        scene.max_depth
    );

    let mut film = render::Film::new(options.width, options.height);
    let render_options = render::RenderOptions {
        band_rows: options.band_rows,
        parallel: options.use_multi_thread,
    };
    let progress = indicatif::ProgressBar::new(options.height as u64);
    progress.set_style(
        indicatif::ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ({elapsed})"),
    );

    let start = std::time::Instant::now();
    render::render(&scene, &camera, &mut film, &render_options, |rows| {
        progress.inc(rows as u64)
    });
    progress.finish();
    log::info!("traced {} rows in {:.2?}", options.height, start.elapsed());

    if let Err(message) = film.write_png(&options.output) {
        eprintln!("can't write image: {}", message);
        std::process::exit(1);
    }
    println!("Wrote {}", options.output);
}
