//! SVG export of a recorded display list
//!
//! Lets headless runs produce a viewable snapshot of what a canvas would show.

use std::fmt::Write;

use super::surface::{DrawCommand, DrawingSurface, Point, RecordingSurface};
use crate::theme::Rgba;

/// Serialize the surface's current contents as a standalone SVG document.
/// `background` paints a full-size rect first (None = transparent).
pub fn to_svg(surface: &RecordingSurface, background: Option<Rgba>) -> String {
    let (w, h) = (surface.width(), surface.height());
    let mut out = String::with_capacity(256 + surface.commands().len() * 96);

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if let Some(bg) = background {
        let _ = writeln!(out, r#"  <rect width="{w}" height="{h}" {}/>"#, paint("fill", bg));
    }

    for cmd in surface.commands() {
        let _ = match cmd {
            DrawCommand::FillCircle { center, radius, color } => writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" {}/>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                paint("fill", *color)
            ),
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
                line_width,
            } => writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="none" {} stroke-width="{}"/>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                paint("stroke", *color),
                fmt_num(*line_width)
            ),
            DrawCommand::Line {
                from,
                to,
                color,
                line_width,
            } => writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}"/>"#,
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                paint("stroke", *color),
                fmt_num(*line_width)
            ),
            DrawCommand::Polygon {
                points,
                fill,
                stroke,
                line_width,
            } => writeln!(
                out,
                r#"  <polygon points="{}" {} {} stroke-width="{}"/>"#,
                points_attr(points),
                paint("fill", *fill),
                paint("stroke", *stroke),
                fmt_num(*line_width)
            ),
        };
    }

    out.push_str("</svg>\n");
    out
}

/// `fill="rgb(..)" fill-opacity=".."` pair; SVG 1.1 has no rgba()
fn paint(attr: &str, color: Rgba) -> String {
    format!(
        r#"{attr}="rgb({}, {}, {})" {attr}-opacity="{}""#,
        color.r,
        color.g,
        color.b,
        fmt_num(color.a)
    )
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Three decimals, trailing zeros trimmed
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
