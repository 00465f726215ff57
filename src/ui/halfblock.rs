//! Truecolor half-block rendering: each terminal cell is `▀` with the upper
//! pixel as foreground and the lower pixel as background.

use std::borrow::Cow;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Grayscale copy when `grayscale` is set, the untouched image otherwise.
pub fn apply_filter(img: &DynamicImage, grayscale: bool) -> Cow<'_, DynamicImage> {
    if grayscale {
        Cow::Owned(img.grayscale())
    } else {
        Cow::Borrowed(img)
    }
}

/// Fit `img` into `width` x `height` cells (aspect preserved, vertically
/// centered) and return the rows to draw.
pub fn render_lines(img: &DynamicImage, width: u16, height: u16, grayscale: bool) -> Vec<Line<'static>> {
    let target_width = width as u32;
    let target_height = height as u32 * 2; // 2 pixels per row
    if target_width == 0 || target_height == 0 {
        return Vec::new();
    }

    // Resize before filtering so grayscale only touches the small copy
    let resized = img.resize(target_width, target_height, FilterType::Triangle);
    let filtered = apply_filter(&resized, grayscale);

    let img_height = filtered.height();
    let img_rows = img_height.div_ceil(2);
    let padding_top = (height as u32).saturating_sub(img_rows) / 2;

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(height as usize);
    for _ in 0..padding_top {
        lines.push(Line::default());
    }

    for y in (0..img_height).step_by(2) {
        let mut spans = Vec::with_capacity(filtered.width() as usize);
        for x in 0..filtered.width() {
            let top = filtered.get_pixel(x, y);
            let bottom = if y + 1 < img_height {
                filtered.get_pixel(x, y + 1)
            } else {
                top
            };

            spans.push(Span::styled(
                "▀",
                Style::default()
                    .fg(Color::Rgb(top[0], top[1], top[2]))
                    .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
    request: u64,
    width: u16,
    height: u16,
    grayscale: bool,
}

/// Last rendered image rows. Resizing a full-size photo is expensive, so it
/// is redone only when the request, the area or the filter changes.
#[derive(Debug, Default)]
pub struct LineCache {
    key: Option<CacheKey>,
    lines: Vec<Line<'static>>,
    renders: u64,
}

impl LineCache {
    pub fn lines(
        &mut self,
        request: u64,
        img: &DynamicImage,
        width: u16,
        height: u16,
        grayscale: bool,
    ) -> &[Line<'static>] {
        let key = CacheKey {
            request,
            width,
            height,
            grayscale,
        };
        if self.key != Some(key) {
            self.lines = render_lines(img, width, height, grayscale);
            self.key = Some(key);
            self.renders += 1;
        }
        &self.lines
    }

    /// Number of times the image was actually resized and converted.
    pub fn renders(&self) -> u64 {
        self.renders
    }
}
