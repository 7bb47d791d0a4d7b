use image::RgbImage;
use rayon::prelude::*;
use tracing::debug;

use crate::config::{FitPolicy, ZoomConfig};
use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::mosaic::Composite;

use super::frame::DisplayFrame;
use super::sample::{blend, tap, Tap};

/// Zoom factor and pan centre over one composite, for a fixed display size.
///
/// `center` is in composite pixel coordinates. After every mutation the zoom
/// lies in `[fit_floor, zoom_ceiling]` and the centre keeps a
/// `display / zoom` window inside the composite on every axis where that is
/// possible; on an axis where the window is wider than the composite the
/// centre collapses to the composite's middle.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportController {
    composite_size: (u32, u32),
    display_size: (u32, u32),
    zoom: f64,
    center: (f64, f64),
    config: ZoomConfig,
}

/// Placement of the display window inside the zoomed composite.
///
/// All values are in zoomed-space pixels. `extent` is the part of the display
/// actually covered by the composite and `pad` the black margin before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewWindow {
    pub zoomed: (u32, u32),
    pub origin: (u32, u32),
    pub extent: (u32, u32),
    pub pad: (u32, u32),
}

impl ViewportController {
    /// Centred, at zoom 1.0 (clamped to the allowed range).
    pub fn new(composite_size: (u32, u32), display_size: (u32, u32), config: ZoomConfig) -> Self {
        let mut viewport = Self {
            composite_size: (composite_size.0.max(1), composite_size.1.max(1)),
            display_size: (display_size.0.max(1), display_size.1.max(1)),
            zoom: 1.0,
            center: (0.0, 0.0),
            config,
        };
        viewport.reset();
        viewport
    }

    pub fn for_composite(composite: &Composite, display_size: (u32, u32), config: ZoomConfig) -> Self {
        Self::new(composite.size(), display_size, config)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn composite_size(&self) -> (u32, u32) {
        self.composite_size
    }

    pub fn display_size(&self) -> (u32, u32) {
        self.display_size
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Minimum zoom: the composite just fills the display in its tightest
    /// dimension (`Contain`) or in both dimensions (`Cover`).
    pub fn fit_floor(&self) -> f64 {
        let fx = f64::from(self.display_size.0) / f64::from(self.composite_size.0);
        let fy = f64::from(self.display_size.1) / f64::from(self.composite_size.1);
        match self.config.fit {
            FitPolicy::Contain => fx.min(fy),
            FitPolicy::Cover => fx.max(fy),
        }
    }

    /// Maximum zoom. Never below the fit floor.
    pub fn zoom_ceiling(&self) -> f64 {
        self.config.max_zoom.max(self.fit_floor())
    }

    /// Set the zoom, clamped to `[fit_floor, zoom_ceiling]`. Non-finite or
    /// non-positive values are ignored.
    pub fn set_zoom(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom = factor.clamp(self.fit_floor(), self.zoom_ceiling());
        }
        self.clamp_center();
    }

    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// Apply a wheel delta: zoom by `step ^ (delta / wheel_unit)`.
    pub fn wheel(&mut self, delta: f64) {
        let notches = delta / self.config.wheel_unit;
        self.zoom_by(self.config.step.powf(notches));
    }

    /// Move the centre by a display-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.0 += dx / self.zoom;
        self.center.1 += dy / self.zoom;
        self.clamp_center();
    }

    /// Re-establish the centre bound for the current zoom.
    pub fn clamp_center(&mut self) {
        self.center.0 = clamp_axis(
            self.center.0,
            f64::from(self.composite_size.0),
            f64::from(self.display_size.0),
            self.zoom,
        );
        self.center.1 = clamp_axis(
            self.center.1,
            f64::from(self.composite_size.1),
            f64::from(self.display_size.1),
            self.zoom,
        );
    }

    /// Back to the middle of the composite at zoom 1.0.
    pub fn reset(&mut self) {
        self.center = (
            f64::from(self.composite_size.0) / 2.0,
            f64::from(self.composite_size.1) / 2.0,
        );
        self.set_zoom(1.0);
    }

    /// Zoom out to the fit floor.
    pub fn fit(&mut self) {
        let floor = self.fit_floor();
        self.set_zoom(floor);
    }

    /// Where the display window falls in the zoomed composite.
    pub fn window(&self) -> ViewWindow {
        let (cw, ch) = self.composite_size;
        let (dw, dh) = self.display_size;
        let zw = zoomed_len(cw, self.zoom);
        let zh = zoomed_len(ch, self.zoom);
        let (ox, ex, px) = window_axis(self.center.0, self.zoom, zw, dw);
        let (oy, ey, py) = window_axis(self.center.1, self.zoom, zh, dh);
        ViewWindow {
            zoomed: (zw, zh),
            origin: (ox, oy),
            extent: (ex, ey),
            pad: (px, py),
        }
    }

    /// Source-space rectangle `(x, y, width, height)` currently shown.
    pub fn visible_rect(&self) -> (f64, f64, f64, f64) {
        let win = self.window();
        let sx = f64::from(self.composite_size.0) / f64::from(win.zoomed.0);
        let sy = f64::from(self.composite_size.1) / f64::from(win.zoomed.1);
        (
            f64::from(win.origin.0) * sx,
            f64::from(win.origin.1) * sy,
            f64::from(win.extent.0) * sx,
            f64::from(win.extent.1) * sy,
        )
    }

    /// Produce the display frame for the current state.
    ///
    /// Equivalent to linearly resizing the whole composite by the zoom factor
    /// and cutting out the display window, but only the visible pixels are
    /// computed. The frame is always exactly the display size; any part not
    /// covered by the composite is black. Same state, same frame.
    pub fn render_frame(&self, composite: &Composite) -> DisplayFrame {
        let source = &composite.image;
        let (dw, dh) = self.display_size;
        let win = self.window();
        let (sw, sh) = source.dimensions();

        let col_taps = axis_taps(dw, win.origin.0, win.extent.0, win.pad.0, sw, win.zoomed.0);
        let row_taps = axis_taps(dh, win.origin.1, win.extent.1, win.pad.1, sh, win.zoomed.1);

        let row_stride = dw as usize * COLOR_CHANNEL_COUNT;
        let mut image = RgbImage::new(dw, dh);

        if sw > 0 && sh > 0 {
            let fill_row = |(row, out): (usize, &mut [u8])| {
                let Some(y) = row_taps[row] else {
                    return;
                };
                for (col, x) in col_taps.iter().enumerate() {
                    if let Some(x) = x {
                        let px = blend(source, *x, y);
                        let at = col * COLOR_CHANNEL_COUNT;
                        out[at..at + COLOR_CHANNEL_COUNT].copy_from_slice(&px);
                    }
                }
            };

            if (dw as usize) * (dh as usize) >= PARALLEL_PIXEL_THRESHOLD {
                image.par_chunks_mut(row_stride).enumerate().for_each(fill_row);
            } else {
                image.chunks_mut(row_stride).enumerate().for_each(fill_row);
            }
        }

        DisplayFrame {
            image,
            zoom: self.zoom,
            center: self.center,
            window: win,
        }
    }
}

fn clamp_axis(center: f64, composite: f64, display_len: f64, zoom: f64) -> f64 {
    let half = display_len / (2.0 * zoom);
    let lo = half;
    let hi = composite - half;
    if lo > hi {
        debug!(composite, display_len, zoom, "Viewport wider than composite, re-centring");
        composite / 2.0
    } else if center.is_nan() {
        composite / 2.0
    } else {
        center.clamp(lo, hi)
    }
}

/// Slack for `len * (display / len)` landing just under `display`.
const ZOOMED_LEN_EPSILON: f64 = 1e-6;

fn zoomed_len(len: u32, zoom: f64) -> u32 {
    ((f64::from(len) * zoom + ZOOMED_LEN_EPSILON).floor() as u32).max(1)
}

/// `(origin, extent, pad)` of the display window along one axis.
fn window_axis(center: f64, zoom: f64, zoomed: u32, display: u32) -> (u32, u32, u32) {
    if zoomed <= display {
        return (0, zoomed, (display - zoomed) / 2);
    }
    let start = (center * zoom - f64::from(display) / 2.0).floor();
    let max_start = f64::from(zoomed - display);
    (start.clamp(0.0, max_start) as u32, display, 0)
}

/// Per output index, the source tap to sample or `None` for padding.
fn axis_taps(
    display: u32,
    origin: u32,
    extent: u32,
    pad: u32,
    src_len: u32,
    zoomed: u32,
) -> Vec<Option<Tap>> {
    (0..display)
        .map(|i| {
            if i < pad || i >= pad + extent {
                None
            } else {
                Some(tap(origin + (i - pad), src_len, zoomed))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_axis_letterboxes_small_content() {
        assert_eq!(window_axis(300.0, 1.0, 600, 800), (0, 600, 100));
    }

    #[test]
    fn window_axis_clamps_to_edges() {
        assert_eq!(window_axis(0.0, 1.0, 900, 800), (0, 800, 0));
        assert_eq!(window_axis(900.0, 1.0, 900, 800), (100, 800, 0));
    }

    #[test]
    fn zoomed_len_absorbs_fit_rounding() {
        for len in [582u32, 867, 1089, 1337, 2999] {
            for display in [600u32, 800] {
                let zoom = f64::from(display) / f64::from(len);
                assert_eq!(zoomed_len(len, zoom), display, "{len} -> {display}");
            }
        }
        assert_eq!(zoomed_len(900, 1.5), 1350);
        assert_eq!(zoomed_len(3, 0.1), 1);
    }

    #[test]
    fn nan_center_recovers() {
        assert_eq!(clamp_axis(f64::NAN, 900.0, 800.0, 1.0), 450.0);
    }
}
