// Software rasterizer for plots: 0RGB framebuffer shared by the viewer window and PNG export

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::command::Plot;
use crate::error::Result;
use crate::fractal::{Bounds, Point, Segment, tree_frame};
use crate::spiral::GoldenSpiral;

pub const BACKGROUND: u32 = 0x001020;
const BRANCH: u32 = 0x2EA043;
const SQUARE: u32 = 0x9B59B6;
const ARC: u32 = 0xFFD700;
const BAR: u32 = 0x3B82C4;
const TEXT: u32 = 0xFFFFFF;

const ARC_SAMPLES: usize = 100;
const DASH: usize = 6;
const PADDING: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub buffer: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { width, height, buffer: vec![BACKGROUND; width * height] }
    }

    pub fn render(plot: &Plot, width: usize, height: usize) -> Self {
        let mut canvas = Canvas::new(width, height);
        match plot {
            Plot::Tree { depth, segments } => {
                canvas.draw_tree(segments);
                canvas.draw_text(10, 10, &format!("depth: {}", depth), TEXT);
            }
            Plot::Spiral(spiral) => {
                canvas.draw_spiral(spiral);
                canvas.draw_text(10, 10, &format!("terms: {}", spiral.terms.len()), TEXT);
            }
            Plot::Bars { title, values } => {
                canvas.draw_bars(values);
                canvas.draw_text(10, 10, &title.to_lowercase(), TEXT);
            }
        }
        canvas
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.buffer[y * self.width + x])
    }

    fn put(&mut self, x: i64, y: i64, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buffer[y as usize * self.width + x as usize] = color;
        }
    }

    /// Bresenham line with a square brush of `thickness` pixels.
    /// Pixels where `keep(step)` is false are skipped, which gives dashes.
    fn stroke<F: Fn(usize) -> bool>(&mut self, from: (i64, i64), to: (i64, i64), thickness: i64, color: u32, keep: F) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        let lo = -(thickness - 1) / 2;
        let hi = thickness / 2;
        let mut step = 0;

        loop {
            if keep(step) {
                for oy in lo..=hi {
                    for ox in lo..=hi {
                        self.put(x + ox, y + oy, color);
                    }
                }
            }
            if (x, y) == to { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x += sx; }
            if e2 <= dx { err += dx; y += sy; }
            step += 1;
        }
    }

    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), thickness: i64, color: u32) {
        self.stroke(from, to, thickness.max(1), color, |_| true);
    }

    pub fn draw_dashed_line(&mut self, from: (i64, i64), to: (i64, i64), color: u32) {
        self.stroke(from, to, 1, color, |step| (step / DASH) % 2 == 0);
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: u32) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    fn draw_tree(&mut self, segments: &[Segment]) {
        let view = Viewport::fit(tree_frame(), self.width, self.height);
        for seg in segments {
            let thickness = seg.thickness.round() as i64;
            self.draw_line(view.to_pixel(seg.start), view.to_pixel(seg.end), thickness, BRANCH);
        }
    }

    fn draw_spiral(&mut self, spiral: &GoldenSpiral) {
        let view = Viewport::fit(spiral.bounds, self.width, self.height);
        for square in &spiral.squares {
            let corners = square.corners().map(|c| view.to_pixel(c));
            for i in 0..4 {
                self.draw_dashed_line(corners[i], corners[(i + 1) % 4], SQUARE);
            }
        }
        for arc in &spiral.arcs {
            let points: Vec<(i64, i64)> = arc.points(ARC_SAMPLES)
                .into_iter()
                .map(|p| view.to_pixel(p))
                .collect();
            for pair in points.windows(2) {
                self.draw_line(pair[0], pair[1], 2, ARC);
            }
        }
    }

    fn draw_bars(&mut self, values: &[u128]) {
        let Some(&max) = values.iter().max() else { return };
        if max == 0 { return; }

        let left = PADDING as i64;
        let top = 2 * PADDING as i64;
        let plot_w = self.width as i64 - 2 * left;
        let plot_h = self.height as i64 - top - left;
        if plot_w <= 0 || plot_h <= 0 { return; }

        let slot = plot_w / values.len() as i64;
        let bar_w = (slot * 4 / 5).max(1);
        let baseline = top + plot_h;

        for (i, &v) in values.iter().enumerate() {
            let h = ((v as f64 / max as f64) * plot_h as f64).round() as i64;
            let x = left + i as i64 * slot;
            self.fill_rect(x, baseline - h, bar_w, h.max(1), BAR);
        }
        self.draw_line((left, baseline), (left + plot_w, baseline), 1, TEXT);
    }

    pub fn draw_text(&mut self, x: usize, y: usize, text: &str, color: u32) {
        let mut offset_x = x;
        for ch in text.chars() {
            if offset_x + 4 >= self.width { break; }
            self.draw_char(offset_x, y, ch, color);
            offset_x += 4;
        }
    }

    // 3x5 pixel font
    fn draw_char(&mut self, x: usize, y: usize, ch: char, color: u32) {
        let pattern: &[u8] = match ch {
            '0' => &[0b111, 0b101, 0b101, 0b101, 0b111],
            '1' => &[0b010, 0b110, 0b010, 0b010, 0b111],
            '2' => &[0b111, 0b001, 0b111, 0b100, 0b111],
            '3' => &[0b111, 0b001, 0b111, 0b001, 0b111],
            '4' => &[0b101, 0b101, 0b111, 0b001, 0b001],
            '5' => &[0b111, 0b100, 0b111, 0b001, 0b111],
            '6' => &[0b111, 0b100, 0b111, 0b101, 0b111],
            '7' => &[0b111, 0b001, 0b001, 0b001, 0b001],
            '8' => &[0b111, 0b101, 0b111, 0b101, 0b111],
            '9' => &[0b111, 0b101, 0b111, 0b001, 0b111],
            '.' => &[0b000, 0b000, 0b000, 0b000, 0b010],
            '-' => &[0b000, 0b000, 0b111, 0b000, 0b000],
            ':' => &[0b000, 0b010, 0b000, 0b010, 0b000],
            'a' => &[0b111, 0b101, 0b111, 0b101, 0b101],
            'b' => &[0b110, 0b101, 0b110, 0b101, 0b110],
            'c' => &[0b111, 0b100, 0b100, 0b100, 0b111],
            'd' => &[0b110, 0b101, 0b101, 0b101, 0b110],
            'e' => &[0b111, 0b100, 0b111, 0b100, 0b111],
            'f' => &[0b111, 0b100, 0b111, 0b100, 0b100],
            'g' => &[0b111, 0b100, 0b101, 0b101, 0b111],
            'h' => &[0b101, 0b101, 0b111, 0b101, 0b101],
            'i' => &[0b111, 0b010, 0b010, 0b010, 0b111],
            'j' => &[0b001, 0b001, 0b001, 0b101, 0b111],
            'l' => &[0b100, 0b100, 0b100, 0b100, 0b111],
            'm' => &[0b101, 0b111, 0b111, 0b101, 0b101],
            'n' => &[0b101, 0b111, 0b111, 0b111, 0b101],
            'o' => &[0b111, 0b101, 0b101, 0b101, 0b111],
            'p' => &[0b111, 0b101, 0b111, 0b100, 0b100],
            'r' => &[0b110, 0b101, 0b110, 0b101, 0b101],
            's' => &[0b111, 0b100, 0b111, 0b001, 0b111],
            't' => &[0b111, 0b010, 0b010, 0b010, 0b010],
            'u' => &[0b101, 0b101, 0b101, 0b101, 0b111],
            'w' => &[0b101, 0b101, 0b111, 0b111, 0b101],
            'y' => &[0b101, 0b101, 0b111, 0b010, 0b010],
            _ => &[0b000, 0b000, 0b000, 0b000, 0b000],
        };

        for (dy, &row) in pattern.iter().enumerate() {
            for dx in 0..3 {
                if row & (1 << (2 - dx)) != 0 {
                    self.put((x + dx) as i64, (y + dy) as i64, color);
                }
            }
        }
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let img = RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = self.buffer[y as usize * self.width + x as usize];
            Rgb([(c >> 16) as u8, (c >> 8) as u8, c as u8])
        });
        img.save(path)?;
        Ok(())
    }
}

/// Maps plot coordinates into pixels, equal aspect, y up, centred with padding.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    bounds: Bounds,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    height: f64,
}

impl Viewport {
    pub fn fit(bounds: Bounds, width: usize, height: usize) -> Self {
        let avail_w = (width as f64 - 2.0 * PADDING).max(1.0);
        let avail_h = (height as f64 - 2.0 * PADDING).max(1.0);
        let scale = (avail_w / bounds.width().max(f64::EPSILON))
            .min(avail_h / bounds.height().max(f64::EPSILON));
        Viewport {
            bounds,
            scale,
            offset_x: (width as f64 - bounds.width() * scale) / 2.0,
            offset_y: (height as f64 - bounds.height() * scale) / 2.0,
            height: height as f64,
        }
    }

    pub fn to_pixel(&self, p: Point) -> (i64, i64) {
        let x = self.offset_x + (p.x - self.bounds.min_x) * self.scale;
        let y = self.height - (self.offset_y + (p.y - self.bounds.min_y) * self.scale);
        (x.round() as i64, y.round() as i64)
    }
}
