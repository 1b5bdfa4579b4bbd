//! Brush/shape point generators
//!
//! Contains algorithms for:
//! - Lines (Bresenham and the Applesoft HPLOT style staircase)
//! - Ellipses (midpoint outline, scanline fill)

use hires_engine::Position;
use serde::{Deserialize, Serialize};

/// How lines are stepped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    /// 8-connected Bresenham line.
    #[default]
    Bresenham,
    /// 4-connected staircase modelled on Applesoft's HPLOT TO.
    Applesoft,
}

impl LineStyle {
    pub fn points(self, p0: Position, p1: Position) -> Vec<Position> {
        match self {
            LineStyle::Bresenham => bresenham_line(p0, p1),
            LineStyle::Applesoft => applesoft_line(p0, p1),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Lines
// ═══════════════════════════════════════════════════════════════════════════

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm
pub fn bresenham_line(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::new();

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == p1.x {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == p1.y {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    points
}

/// Staircase line in the manner of Applesoft's HPLOT TO.
///
/// Every step moves either horizontally or vertically, so the line has
/// `dx + dy + 1` points. The error term starts at zero instead of half a
/// step, which makes the first step horizontal even on steep lines. The ROM
/// routine rounds differently on some slopes; the results are kept as they
/// are so existing pictures redraw identically.
pub fn applesoft_line(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx + dy + 1) as usize);
    let mut x = p0.x;
    let mut y = p0.y;
    let mut err = 0;
    points.push(Position::new(x, y));

    while x != p1.x || y != p1.y {
        if x != p1.x && (err <= 0 || y == p1.y) {
            x += sx;
            err += dy;
        } else {
            y += sy;
            err -= dx;
        }
        points.push(Position::new(x, y));
    }

    points
}

// ═══════════════════════════════════════════════════════════════════════════
// Ellipses
// ═══════════════════════════════════════════════════════════════════════════

fn ellipse_frame(p0: Position, p1: Position) -> (Position, i32, i32) {
    let min = p0.min(p1);
    let max = p0.max(p1);
    let center = Position::new((min.x + max.x) / 2, (min.y + max.y) / 2);
    (center, (max.x - min.x) / 2, (max.y - min.y) / 2)
}

/// Outline of the ellipse inscribed in the box spanned by p0 and p1
/// (midpoint algorithm). Points may repeat.
pub fn ellipse_points(p0: Position, p1: Position) -> Vec<Position> {
    let (center, radius_x, radius_y) = ellipse_frame(p0, p1);
    if radius_x <= 0 || radius_y <= 0 {
        return bresenham_line(Position::new(center.x - radius_x, center.y - radius_y), Position::new(center.x + radius_x, center.y + radius_y));
    }

    let mut points = Vec::new();

    let rx2 = i64::from(radius_x) * i64::from(radius_x);
    let ry2 = i64::from(radius_y) * i64::from(radius_y);
    let two_rx2 = 2 * rx2;
    let two_ry2 = 2 * ry2;

    let mut x = 0i32;
    let mut y = radius_y;
    let mut px = 0i64;
    let mut py = two_rx2 * i64::from(y);

    plot_quadrants(&mut points, center, x, y);

    // Region 1: |slope| < 1
    let mut p = (ry2 - rx2 * i64::from(radius_y)) + rx2 / 4;
    while px < py {
        x += 1;
        px += two_ry2;
        if p < 0 {
            p += ry2 + px;
        } else {
            y -= 1;
            py -= two_rx2;
            p += ry2 + px - py;
        }
        plot_quadrants(&mut points, center, x, y);
    }

    // Region 2: |slope| >= 1
    p = (ry2 * (i64::from(x) * 2 + 1).pow(2)) / 4 + rx2 * (i64::from(y) - 1).pow(2) - rx2 * ry2;
    while y > 0 {
        y -= 1;
        py -= two_rx2;
        if p > 0 {
            p += rx2 - py;
        } else {
            x += 1;
            px += two_ry2;
            p += rx2 - py + px;
        }
        plot_quadrants(&mut points, center, x, y);
    }

    points
}

fn plot_quadrants(points: &mut Vec<Position>, center: Position, x: i32, y: i32) {
    points.push(Position::new(center.x + x, center.y - y));
    points.push(Position::new(center.x - x, center.y - y));
    points.push(Position::new(center.x - x, center.y + y));
    points.push(Position::new(center.x + x, center.y + y));
}

/// Horizontal spans `(y, left, width)` filling the ellipse inscribed in the
/// box spanned by p0 and p1.
pub fn filled_ellipse_spans(p0: Position, p1: Position) -> Vec<(i32, i32, i32)> {
    let (center, radius_x, radius_y) = ellipse_frame(p0, p1);
    if radius_y <= 0 {
        return vec![(center.y, center.x - radius_x, 2 * radius_x + 1)];
    }

    let rx = f64::from(radius_x);
    let ry = f64::from(radius_y);
    (-radius_y..=radius_y)
        .map(|dy| {
            let t = f64::from(dy) / ry;
            let x_extent = (rx * (1.0 - t * t).sqrt()).round() as i32;
            (center.y + dy, center.x - x_extent, 2 * x_extent + 1)
        })
        .collect()
}
