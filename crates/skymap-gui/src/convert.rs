use skymap_core::config::ChannelOrder;
use skymap_core::viewport::DisplayFrame;

/// Convert a rendered DisplayFrame to an egui ColorImage.
pub fn frame_to_color_image(frame: &DisplayFrame) -> egui::ColorImage {
    // egui textures are always RGB(A), whatever the configured output order.
    let buffer = frame.to_presentation(ChannelOrder::Rgb);
    egui::ColorImage::from_rgb(
        [buffer.width as usize, buffer.height as usize],
        &buffer.pixels,
    )
}
