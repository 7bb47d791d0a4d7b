use image::RgbImage;

/// One axis of a bilinear lookup: the two neighbouring source indices and the
/// weight of the second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Tap {
    pub i0: u32,
    pub i1: u32,
    pub t: f32,
}

/// Map zoomed-space pixel `index` back to a source-space tap.
///
/// Pixel centres sit at half-integers on both sides, matching a full linear
/// resize from `src_len` to `zoomed_len`. Coordinates past the edges replicate
/// the border pixel.
pub(super) fn tap(index: u32, src_len: u32, zoomed_len: u32) -> Tap {
    let scale = f64::from(src_len) / f64::from(zoomed_len.max(1));
    let last = src_len.saturating_sub(1);
    let pos = ((f64::from(index) + 0.5) * scale - 0.5).clamp(0.0, f64::from(last));
    let i0 = pos.floor() as u32;
    Tap {
        i0,
        i1: (i0 + 1).min(last),
        t: (pos - f64::from(i0)) as f32,
    }
}

/// Bilinear blend of the four source pixels addressed by `x` and `y`.
pub(super) fn blend(src: &RgbImage, x: Tap, y: Tap) -> [u8; 3] {
    let p00 = src.get_pixel(x.i0, y.i0).0;
    let p10 = src.get_pixel(x.i1, y.i0).0;
    let p01 = src.get_pixel(x.i0, y.i1).0;
    let p11 = src.get_pixel(x.i1, y.i1).0;

    let mut out = [0u8; 3];
    for c in 0..3 {
        let top = f32::from(p00[c]) * (1.0 - x.t) + f32::from(p10[c]) * x.t;
        let bottom = f32::from(p01[c]) * (1.0 - x.t) + f32::from(p11[c]) * x.t;
        let v = top * (1.0 - y.t) + bottom * y.t;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}
