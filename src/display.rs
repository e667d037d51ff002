//-------------------------------------------------------------------//
//    plasmainit : initial plasma state generator for 3D PIC codes   //
//           version 1.0, release date: October 19, 2026             //
//-------------------------------------------------------------------//
// Disclaimer: plasmainit is free software: you can redistribute it  //
// and/or modify it under the terms of the GNU General Public License//
// as published by the Free Software Foundation, version 3.          //
// This program is distributed in the hope that it will be useful,   //
// but WITHOUT ANY WARRANTY; without even the implied warranty of    //
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU  //
// General Public License for more details at                        //
// https://www.gnu.org/licenses/gpl-3.0.html.                        //
//-------------------------------------------------------------------//

//! Isometric SVG scatter of the sampled positions inside the full domain box.

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::DistributionType;
use crate::error::{PlasmaError, Result};
use crate::plasma::InitialPlasma;
use crate::species::Species;

const WIDTH: u32 = 900;
const HEIGHT: u32 = 700;
const MARGIN: f64 = 40.0;
const POINT_RADIUS: f64 = 1.2;

/// Isometric projection, 30 degrees off each horizontal axis, z up.
pub fn isometric(p: [f64; 3]) -> (f64, f64) {
    let angle = PI / 6.0;
    ((p[0] - p[1]) * angle.cos(), (p[0] + p[1]) * angle.sin() - p[2])
}

/// SVG document builder mapping projected world points to the canvas.
pub struct SvgRenderer {
    width: u32,
    height: u32,
    content: String,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl SvgRenderer {
    /// Fits the projection of the box `[0, extent]` into the canvas.
    pub fn new(width: u32, height: u32, extent: [f64; 3]) -> Self {
        let corners = box_corners(extent);
        let projected: Vec<(f64, f64)> = corners.iter().map(|&c| isometric(c)).collect();
        let min_x = projected.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = projected.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = projected.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = projected.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let span_x = (max_x - min_x).max(f64::EPSILON);
        let span_y = (max_y - min_y).max(f64::EPSILON);
        let scale = ((width as f64 - 2.0 * MARGIN) / span_x).min((height as f64 - 2.0 * MARGIN) / span_y);

        SvgRenderer {
            width,
            height,
            content: String::with_capacity(100_000),
            scale,
            offset_x: MARGIN - min_x * scale,
            offset_y: MARGIN - min_y * scale,
        }
    }

    fn world_to_screen(&self, p: [f64; 3]) -> (f64, f64) {
        let (x, y) = isometric(p);
        (self.offset_x + x * self.scale, self.offset_y + y * self.scale)
    }

    pub fn line(&mut self, a: [f64; 3], b: [f64; 3], stroke: &str, stroke_width: f64) {
        let (x1, y1) = self.world_to_screen(a);
        let (x2, y2) = self.world_to_screen(b);
        self.content.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    pub fn point(&mut self, p: [f64; 3], fill: &str) {
        let (cx, cy) = self.world_to_screen(p);
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.1}" fill="{}"/>"#,
            cx, cy, POINT_RADIUS, fill
        ));
        self.content.push('\n');
    }

    pub fn label(&mut self, p: [f64; 3], text: &str) {
        let (x, y) = self.world_to_screen(p);
        self.content.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="14" fill="black">{}</text>"#,
            x, y, text
        ));
        self.content.push('\n');
    }

    /// The twelve edges of the box `[0, extent]`.
    pub fn wire_box(&mut self, extent: [f64; 3], stroke: &str) {
        let c = box_corners(extent);
        let edges = [
            (0, 1), (0, 2), (0, 4), (1, 3), (1, 5), (2, 3),
            (2, 6), (3, 7), (4, 5), (4, 6), (5, 7), (6, 7),
        ];
        for &(a, b) in edges.iter() {
            self.line(c[a], c[b], stroke, 1.0);
        }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n{}</svg>\n",
            self.content,
            w = self.width,
            h = self.height
        )
    }
}

// corner k has bit 0 for x, bit 1 for y, bit 2 for z
fn box_corners(extent: [f64; 3]) -> [[f64; 3]; 8] {
    let mut corners = [[0.0; 3]; 8];
    for (k, corner) in corners.iter_mut().enumerate() {
        for (axis, value) in corner.iter_mut().enumerate() {
            if k & (1 << axis) != 0 {
                *value = extent[axis];
            }
        }
    }
    corners
}

/// Positions shown for each density mode: the beam alone for a uniform
/// plasma; ions plus every second electron entry for a sinusoidal one.
pub fn selected_points(plasma: &InitialPlasma) -> Vec<(Species, [f64; 3])> {
    let particles = &plasma.particles;
    match plasma.config.distribution {
        DistributionType::Uniform => {
            let beam = &particles[Species::Beam];
            (0..beam.len()).map(|i| (Species::Beam, beam.position(i))).collect()
        }
        DistributionType::Sinusoidal => {
            let ions = &particles[Species::Ion];
            let electrons = &particles[Species::Electron];
            (0..ions.len())
                .map(|i| (Species::Ion, ions.position(i)))
                .chain((0..electrons.len()).step_by(2).map(|i| (Species::Electron, electrons.position(i))))
                .collect()
        }
    }
}

fn color(s: Species) -> &'static str {
    match s {
        Species::Electron => "#3296ff",
        Species::Beam => "#ff6432",
        Species::Ion => "#2ca02c",
    }
}

pub fn render_scatter(plasma: &InitialPlasma) -> String {
    let extent = plasma.config.domain_length;
    let mut svg = SvgRenderer::new(WIDTH, HEIGHT, extent);
    svg.wire_box(extent, "#808080");
    svg.label([extent[0], 0.0, 0.0], "x");
    svg.label([0.0, extent[1], 0.0], "y");
    svg.label([0.0, 0.0, extent[2]], "z");
    for (s, p) in selected_points(plasma) {
        svg.point(p, color(s));
    }
    svg.finish()
}

pub fn write_scatter(path: &Path, plasma: &InitialPlasma) -> Result<()> {
    fs::write(path, render_scatter(plasma)).map_err(|e| PlasmaError::io(path, e))?;
    info!("scatter plot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reference_parameters;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plasma(distribution_type: i64) -> InitialPlasma {
        let mut p = reference_parameters();
        p.distribution_type = distribution_type;
        let config = p.validate().unwrap();
        InitialPlasma::generate(&config, &mut StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn uniform_shows_the_beam() {
        let plasma = plasma(1);
        let points = selected_points(&plasma);
        assert_eq!(points.len(), plasma.count(Species::Beam));
        assert!(points.iter().all(|(s, _)| *s == Species::Beam));
    }

    #[test]
    fn sinusoidal_shows_ions_and_half_the_electrons() {
        let plasma = plasma(2);
        let points = selected_points(&plasma);
        let electrons = points.iter().filter(|(s, _)| *s == Species::Electron).count();
        let ions = points.iter().filter(|(s, _)| *s == Species::Ion).count();
        assert_eq!(ions, plasma.count(Species::Ion));
        assert_eq!(electrons, plasma.count(Species::Ion));
        assert_eq!(points.len(), electrons + ions);
    }

    #[test]
    fn box_fits_the_canvas() {
        let extent = [10.0, 5.0, 5.0];
        let svg = SvgRenderer::new(WIDTH, HEIGHT, extent);
        for c in box_corners(extent).iter() {
            let (x, y) = svg.world_to_screen(*c);
            assert!(x >= MARGIN - 1e-9 && x <= WIDTH as f64 - MARGIN + 1e-9);
            assert!(y >= MARGIN - 1e-9 && y <= HEIGHT as f64 - MARGIN + 1e-9);
        }
    }

    #[test]
    fn document_has_box_and_points() {
        let plasma = plasma(1);
        let svg = render_scatter(&plasma);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<line").count(), 12);
        assert_eq!(svg.matches("<circle").count(), plasma.count(Species::Beam));
    }

    #[test]
    fn scatter_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plasma.svg");
        write_scatter(&path, &plasma(2)).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<circle"));
    }
}
