use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rayon::prelude::*;

use geometry::camera::Camera;
use scene::Scene;

use crate::whitted::whitted_integrator;

const NUM_CHANNELS: usize = 4;

/// The output surface: a width x height RGBA byte buffer, row-major, origin at the top-left.
/// The renderer only ever writes it.
pub struct Film {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Film {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * NUM_CHANNELS],
        }
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn write_png(&self, path: &str) -> Result<(), String> {
        let file = File::create(Path::new(path)).map_err(|e| format!("{}: {}", path, e))?;
        let ref mut w = BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::RGBA);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| format!("{}: {}", path, e))?;
        writer
            .write_image_data(&self.data)
            .map_err(|e| format!("{}: {}", path, e))
    }
}

pub struct RenderOptions {
    /// Rows per band; the progress callback runs once per band.
    pub band_rows: usize,
    /// Render the rows of a band in parallel. Traces are independent, so this only changes
    /// wall-clock time.
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            band_rows: 10,
            parallel: true,
        }
    }
}

/// Renders the scene through `camera` onto `film`, band by band. `on_band_done` is called
/// with the number of rows finished after each band, so a caller can report progress or show
/// partial results between bands.
pub fn render<F>(
    scene: &Scene,
    camera: &Camera,
    film: &mut Film,
    options: &RenderOptions,
    mut on_band_done: F,
) where
    F: FnMut(u32),
{
    let (width, height) = (film.width, film.height);
    let row_bytes = width as usize * NUM_CHANNELS;
    let band_rows = options.band_rows.max(1);

    for (band_index, band) in film.data.chunks_mut(row_bytes * band_rows).enumerate() {
        let first_row = (band_index * band_rows) as u32;
        if options.parallel {
            band.par_chunks_mut(row_bytes)
                .enumerate()
                .for_each(|(i, row_buf)| {
                    shade_row(scene, camera, (width, height), first_row + i as u32, row_buf)
                });
        } else {
            band.chunks_mut(row_bytes).enumerate().for_each(|(i, row_buf)| {
                shade_row(scene, camera, (width, height), first_row + i as u32, row_buf)
            });
        }
        on_band_done((band.len() / row_bytes) as u32);
    }
}

fn shade_row(
    scene: &Scene,
    camera: &Camera,
    (width, height): (u32, u32),
    row: u32,
    row_buf: &mut [u8],
) {
    // Normalized film coordinates: row 0 is the top of the image, y points up.
    let y = (height - 1 - row) as f32 / height as f32;
    for (col, px) in row_buf.chunks_exact_mut(NUM_CHANNELS).enumerate() {
        let x = col as f32 / width as f32;
        let ray = camera.ray_at(x, y);
        let color = whitted_integrator(scene, ray, 0);
        let [r, g, b] = (color * scene.exposure).clamped().gamma_encode().to_u8();
        px.copy_from_slice(&[r, g, b, 0xff]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiometry::color::Color;

    #[test]
    fn film_starts_transparent_black_and_sized() {
        let film = Film::new(16, 9);
        assert_eq!(film.data().len(), 16 * 9 * NUM_CHANNELS);
        assert!(film.data().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn bands_cover_every_row_exactly_once() {
        // 23 rows over bands of 10 = 10 + 10 + 3.
        let scene = scene::Scene::new(vec![]).with_background(Color::gray(0.5));
        let camera = Camera::new(math::new_deg(60.0), 1.0);
        let mut film = Film::new(8, 23);
        let mut rows_seen = vec![];
        let options = RenderOptions {
            parallel: false,
            ..Default::default()
        };
        render(&scene, &camera, &mut film, &options, |rows| {
            rows_seen.push(rows)
        });
        assert_eq!(rows_seen, vec![10, 10, 3]);
        // Every pixel saw the background: opaque and uniform.
        let px0 = &film.data()[..NUM_CHANNELS];
        assert_eq!(px0[3], 0xff);
        assert!(film
            .data()
            .chunks_exact(NUM_CHANNELS)
            .all(|px| px == px0));
    }
}
