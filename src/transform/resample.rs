use crate::foundation::core::Frame;

/// Resize `src` to `dst_width x dst_height` with bilinear interpolation.
///
/// Sample positions use pixel centres, `src = (dst + 0.5) * scale - 0.5`, clamped to the source
/// edge. No pre-filtering is applied when shrinking. Same-size requests return an exact copy.
pub fn resize_bilinear(src: &Frame, dst_width: u32, dst_height: u32) -> Frame {
    if src.dimensions() == (dst_width, dst_height) {
        return src.clone();
    }
    resize_bilinear_region(
        src,
        (u64::from(dst_width), u64::from(dst_height)),
        (0, 0),
        (dst_width, dst_height),
    )
}

/// Render only part of a bilinear resize of `src` to a virtual `full` (width, height) image.
///
/// The output is the `size` region whose top-left corner sits at `origin` in the resized image,
/// pixel-for-pixel equal to resizing in full and cropping, but allocating only `size`. `full`
/// may be far larger than anything that fits in memory.
pub fn resize_bilinear_region(
    src: &Frame,
    full: (u64, u64),
    origin: (u64, u64),
    size: (u32, u32),
) -> Frame {
    let (sw, sh) = src.dimensions();
    let (out_w, out_h) = size;
    let mut out = Frame::new(out_w, out_h);
    if sw == 0 || sh == 0 || out_w == 0 || out_h == 0 || full.0 == 0 || full.1 == 0 {
        return out;
    }

    let xs = taps(sw, full.0, origin.0, out_w);
    let ys = taps(sh, full.1, origin.1, out_h);
    let src_raw: &[u8] = src.as_raw();
    let src_stride = sw as usize * 3;
    let dst_stride = out_w as usize * 3;
    let dst: &mut [u8] = &mut out;

    for (row, ty) in dst.chunks_exact_mut(dst_stride).zip(ys.iter()) {
        let r0 = &src_raw[ty.i0 * src_stride..(ty.i0 + 1) * src_stride];
        let r1 = &src_raw[ty.i1 * src_stride..(ty.i1 + 1) * src_stride];
        for (px, tx) in row.chunks_exact_mut(3).zip(xs.iter()) {
            let (a, b) = (tx.i0 * 3, tx.i1 * 3);
            for c in 0..3 {
                let top = lerp(r0[a + c], r0[b + c], tx.w1);
                let bottom = lerp(r1[a + c], r1[b + c], tx.w1);
                px[c] = to_u8(top + (bottom - top) * ty.w1);
            }
        }
    }
    out
}

/// Neighbouring source indices and the weight of the second one.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    i0: usize,
    i1: usize,
    w1: f32,
}

/// Taps for destination positions `start..start + count` of a `src_len -> full_len` resize.
fn taps(src_len: u32, full_len: u64, start: u64, count: u32) -> Vec<Tap> {
    let scale = f64::from(src_len) / full_len as f64;
    let last = (src_len - 1) as usize;
    (0..u64::from(count))
        .map(|i| {
            let d = start.saturating_add(i) as f64;
            let pos = ((d + 0.5) * scale - 0.5).clamp(0.0, last as f64);
            let i0 = pos.floor() as usize;
            Tap {
                i0,
                i1: (i0 + 1).min(last),
                w1: (pos - i0 as f64) as f32,
            }
        })
        .collect()
}

fn lerp(a: u8, b: u8, t: f32) -> f32 {
    let a = f32::from(a);
    a + (f32::from(b) - a) * t
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resample.rs"]
mod tests;
