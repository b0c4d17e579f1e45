//! PNG preview of walker paths

use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::algorithm::WalkerPopulation;
use crate::algorithm::spawner::ColorMode;
use crate::algorithm::walker::Walker;
use crate::io::configuration::{RenderConfig, SimulationConfig};
use crate::io::error::{Result, WalkerError, file_system_error};
use crate::math::Vec2;
use crate::math::interpolation::map_range;

/// Map a simulation point onto a `width` x `height` canvas
///
/// `[-S, S]` spans the full canvas on both axes, so non-square paper
/// stretches the domain.
pub fn to_canvas(point: Vec2, half_size: f64, width: f64, height: f64) -> (f64, f64) {
    (
        map_range(point.x, -half_size, half_size, 0.0, width),
        map_range(point.y, -half_size, half_size, 0.0, height),
    )
}

/// Stroke color of a walker in the preview, `None` if it is not drawn
///
/// Single color mode only shows the selected pencil channel; the other modes
/// show every walker in its group color.
pub fn preview_color(
    walker: &Walker,
    simulation: &SimulationConfig,
    render: &RenderConfig,
) -> Option<[u8; 4]> {
    match simulation.color_mode {
        ColorMode::Single => {
            (walker.channel() == simulation.draw_channel).then(|| render.group_color(1))
        }
        ColorMode::Direction | ColorMode::Position => Some(render.group_color(walker.color_group())),
    }
}

/// Rasterize every visible stroke onto a fresh canvas
pub fn render_paths(
    population: &WalkerPopulation,
    simulation: &SimulationConfig,
    render: &RenderConfig,
) -> RgbaImage {
    let (width, height) = render.paper.canvas_pixels();
    let mut img = ImageBuffer::from_pixel(width, height, Rgba(render.background));

    for (walker, path) in population.trails() {
        let Some(color) = preview_color(walker, simulation, render) else {
            continue;
        };
        for stroke in path.strokes() {
            let pixels: Vec<(i64, i64)> = stroke
                .iter()
                .map(|&point| {
                    let (x, y) =
                        to_canvas(point, simulation.size, f64::from(width), f64::from(height));
                    (x.round() as i64, y.round() as i64)
                })
                .collect();

            if let [only] = pixels.as_slice() {
                plot(&mut img, *only, color);
            }
            for pair in pixels.windows(2) {
                if let [from, to] = pair {
                    draw_line(&mut img, *from, *to, color);
                }
            }
        }
    }

    img
}

/// Render the population and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written
pub fn export_paths_as_png(
    population: &WalkerPopulation,
    simulation: &SimulationConfig,
    render: &RenderConfig,
    output_path: &Path,
) -> Result<()> {
    let img = render_paths(population, simulation, render);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| WalkerError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Bresenham line between two pixel positions, clipped to the canvas
fn draw_line(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: [u8; 4]) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let step_x = if x < to.0 { 1 } else { -1 };
    let step_y = if y < to.1 { 1 } else { -1 };
    let mut error = dx + dy;

    for _ in 0..=dx.max(-dy) {
        plot(img, (x, y), color);
        if x == to.0 && y == to.1 {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

fn plot(img: &mut RgbaImage, (x, y): (i64, i64), color: [u8; 4]) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
        *pixel = Rgba(color);
    }
}
