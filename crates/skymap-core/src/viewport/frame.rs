use image::RgbImage;

use crate::config::ChannelOrder;
use crate::consts::COLOR_CHANNEL_COUNT;

use super::controller::ViewWindow;

/// A rendered view of the composite, exactly display-sized. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayFrame {
    /// RGB pixels.
    pub image: RgbImage,
    /// Zoom the frame was rendered at.
    pub zoom: f64,
    /// Pan centre the frame was rendered at (composite pixels).
    pub center: (f64, f64),
    pub window: ViewWindow,
}

impl DisplayFrame {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Interleaved 8-bit buffer in the channel order the presentation layer expects.
    pub fn to_presentation(&self, order: ChannelOrder) -> PresentationBuffer {
        let mut pixels = self.image.as_raw().clone();
        if order == ChannelOrder::Bgr {
            for px in pixels.chunks_exact_mut(COLOR_CHANNEL_COUNT) {
                px.swap(0, 2);
            }
        }
        PresentationBuffer {
            width: self.width(),
            height: self.height(),
            channels: COLOR_CHANNEL_COUNT,
            row_stride: self.width() as usize * COLOR_CHANNEL_COUNT,
            order,
            pixels,
        }
    }
}

/// `(width, height, channels, row_stride, pixels)` as handed to a UI toolkit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationBuffer {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    pub row_stride: usize,
    pub order: ChannelOrder,
    pub pixels: Vec<u8>,
}
