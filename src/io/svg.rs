//! Layered SVG export for plotters
//!
//! Each color group becomes its own `<g>` layer so a plotter can swap pens
//! between layers. Every stroke with at least two points becomes one `<path>`.

use std::fmt::Write;
use std::path::Path;

use crate::algorithm::WalkerPopulation;
use crate::io::configuration::{COLOR_GROUPS, RenderConfig, SVG_STROKE_WIDTH};
use crate::io::error::{Result, computation_error, file_system_error};
use crate::io::image::to_canvas;
use crate::io::palette::{to_hex, to_svg_rgb};

/// Build the SVG document for a finished (or in-progress) population
///
/// # Errors
///
/// Returns a computation error if formatting into the document buffer fails
pub fn render_svg(population: &WalkerPopulation, render: &RenderConfig) -> Result<String> {
    let fmt_error = |e: std::fmt::Error| computation_error("svg formatting", &e);

    let (document_width, document_height) = render.paper.document_pixels();
    let (canvas_width, canvas_height) = render.paper.canvas_pixels();
    let half_size = population.registry().domain().half_size();

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    )
    .map_err(fmt_error)?;
    writeln!(
        svg,
        r#"<svg width="{document_width}px" height="{document_height}px" viewBox="0 0 {canvas_width} {canvas_height}" xmlns="http://www.w3.org/2000/svg">"#
    )
    .map_err(fmt_error)?;
    writeln!(
        svg,
        r#"<rect width="{canvas_width}" height="{canvas_height}" fill="white"/>"#
    )
    .map_err(fmt_error)?;

    let dash = render
        .line_style
        .dash_array()
        .map(|pattern| format!(r#" stroke-dasharray="{pattern}""#))
        .unwrap_or_default();

    for group in 1..=COLOR_GROUPS as u8 {
        let color = render.group_color(group);
        writeln!(
            svg,
            r#"<g id="{group}_color" class="color-layer" data-color="{}">"#,
            to_hex(color)
        )
        .map_err(fmt_error)?;

        for (_, path) in population
            .trails()
            .filter(|(walker, _)| walker.color_group() == group)
        {
            for stroke in path.strokes() {
                if stroke.len() < 2 {
                    continue;
                }
                let mut data = String::new();
                for (index, &point) in stroke.iter().enumerate() {
                    let (x, y) = to_canvas(
                        point,
                        half_size,
                        f64::from(canvas_width),
                        f64::from(canvas_height),
                    );
                    let command = if index == 0 { "M" } else { " L" };
                    write!(data, "{command}{x},{y}").map_err(fmt_error)?;
                }
                writeln!(
                    svg,
                    r#"<path d="{data}" stroke="{}" fill="none" stroke-width="{SVG_STROKE_WIDTH}"{dash}/>"#,
                    to_svg_rgb(color)
                )
                .map_err(fmt_error)?;
            }
        }

        writeln!(svg, "</g>").map_err(fmt_error)?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}

/// Write the SVG document to `output_path`, creating parent directories
///
/// # Errors
///
/// Returns an error if formatting fails or the file cannot be written
pub fn export_svg(
    population: &WalkerPopulation,
    render: &RenderConfig,
    output_path: &Path,
) -> Result<()> {
    let document = render_svg(population, render)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    std::fs::write(output_path, document)
        .map_err(|e| file_system_error(output_path, "write svg", e))
}
