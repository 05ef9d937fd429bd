use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use super::font::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, text_width};
use super::summary::{CertificateSummary, LineStyle};
use crate::error::ExportError;

pub const CERTIFICATE_WIDTH: u32 = 960;
pub const CERTIFICATE_HEIGHT: u32 = 640;

const MARGIN: u32 = 48;
const BORDER: u32 = 10;
const LINE_GAP: u32 = 18;
const BAR_HEIGHT: u32 = 18;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([17, 17, 17, 255]);
const MUTED: Rgba<u8> = Rgba([96, 96, 96, 255]);
const ACCENT: Rgba<u8> = Rgba([37, 99, 235, 255]);
const TRACK: Rgba<u8> = Rgba([229, 231, 235, 255]);
const SUCCESS: Rgba<u8> = Rgba([34, 197, 94, 255]);

fn style_scale(style: LineStyle) -> u32 {
    match style {
        LineStyle::Title => 5,
        LineStyle::Strong => 4,
        LineStyle::Body => 3,
        LineStyle::Small => 2,
    }
}

fn style_color(style: LineStyle) -> Rgba<u8> {
    match style {
        LineStyle::Title => ACCENT,
        LineStyle::Strong => INK,
        LineStyle::Body | LineStyle::Small => MUTED,
    }
}

/// Rasterize the certificate and encode it as PNG.
///
/// # Errors
///
/// Returns `ExportError::InvalidSummary` for impossible scores and
/// `ExportError::Encode` if PNG encoding fails.
pub fn render_certificate_png(summary: &CertificateSummary) -> Result<Vec<u8>, ExportError> {
    let canvas = render_certificate(summary)?;
    let mut out = Vec::new();
    DynamicImage::ImageRgba8(canvas).write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}

/// Rasterize the certificate without encoding.
///
/// # Errors
///
/// Returns `ExportError::InvalidSummary` for impossible scores.
pub fn render_certificate(summary: &CertificateSummary) -> Result<RgbaImage, ExportError> {
    if !summary.is_valid() {
        return Err(ExportError::InvalidSummary {
            score: summary.score,
            total: summary.total,
        });
    }

    let mut canvas = RgbaImage::from_pixel(CERTIFICATE_WIDTH, CERTIFICATE_HEIGHT, WHITE);
    draw_frame(&mut canvas);

    let max_text_width = CERTIFICATE_WIDTH - 2 * MARGIN;
    let lines: Vec<_> = summary
        .lines()
        .into_iter()
        .map(|line| {
            let scale = fit_scale(&line.text, style_scale(line.style), max_text_width);
            (line, scale)
        })
        .collect();

    let content_height: u32 = lines
        .iter()
        .map(|(_, scale)| GLYPH_HEIGHT * scale + LINE_GAP)
        .sum::<u32>()
        + BAR_HEIGHT;
    let mut y = CERTIFICATE_HEIGHT.saturating_sub(content_height) / 2;

    for (line, scale) in &lines {
        let width = text_width(&line.text, *scale);
        let x = CERTIFICATE_WIDTH.saturating_sub(width) / 2;
        draw_text(&mut canvas, &line.text, x, y, *scale, style_color(line.style));
        y += GLYPH_HEIGHT * scale + LINE_GAP;
    }

    draw_score_bar(&mut canvas, summary.score, summary.total, y);
    Ok(canvas)
}

fn fit_scale(text: &str, preferred: u32, max_width: u32) -> u32 {
    (1..=preferred)
        .rev()
        .find(|scale| text_width(text, *scale) <= max_width)
        .unwrap_or(1)
}

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(canvas.width());
    let y_end = (y + h).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

fn draw_frame(canvas: &mut RgbaImage) {
    let (w, h) = canvas.dimensions();
    let inset = BORDER * 2;
    fill_rect(canvas, inset, inset, w - 2 * inset, BORDER, ACCENT);
    fill_rect(canvas, inset, h - inset - BORDER, w - 2 * inset, BORDER, ACCENT);
    fill_rect(canvas, inset, inset, BORDER, h - 2 * inset, ACCENT);
    fill_rect(canvas, w - inset - BORDER, inset, BORDER, h - 2 * inset, ACCENT);
}

fn draw_text(canvas: &mut RgbaImage, text: &str, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    let mut cursor = x;
    for ch in text.chars() {
        for (row, bits) in glyph(ch).iter().enumerate() {
            let row = u32::try_from(row).unwrap_or(0);
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    fill_rect(
                        canvas,
                        cursor + col * scale,
                        y + row * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
        cursor += GLYPH_ADVANCE * scale;
    }
}

fn draw_score_bar(canvas: &mut RgbaImage, score: u32, total: u32, y: u32) {
    let track_width = CERTIFICATE_WIDTH / 2;
    let x = (CERTIFICATE_WIDTH - track_width) / 2;
    fill_rect(canvas, x, y, track_width, BAR_HEIGHT, TRACK);
    let filled = u32::try_from(u64::from(track_width) * u64::from(score) / u64::from(total))
        .unwrap_or(track_width);
    fill_rect(canvas, x, y, filled, BAR_HEIGHT, SUCCESS);
}
