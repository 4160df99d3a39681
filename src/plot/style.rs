/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Point-based sizing for figures rendered at a given DPI

use plotters::style::{FontDesc, FontFamily, FontStyle};

/// Converts typographic points into pixels for one output resolution
#[derive(Debug, Clone, Copy)]
pub(crate) struct Typography {
    px_per_pt: f64,
}

impl Typography {
    pub(crate) fn new(dpi: u32) -> Self {
        Self {
            px_per_pt: dpi as f64 / 72.0,
        }
    }

    /// Length in pixels of `pt` points, never less than one pixel
    pub(crate) fn px(&self, pt: f64) -> u32 {
        (pt * self.px_per_pt).round().max(1.0) as u32
    }

    pub(crate) fn font(&self, pt: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, pt * self.px_per_pt, FontStyle::Normal)
    }

    pub(crate) fn bold(&self, pt: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, pt * self.px_per_pt, FontStyle::Bold)
    }
}
