use crate::consts::CHROMA_KEY;
use crate::framebuffer::{set_rgb, Framebuffer};
use crate::texture::Texture;

// Requires y_lo > y_hi and u in [0, 1]. Callers must skip columns with
// y_lo <= y_hi themselves (a wall whose projected height rounds to zero) --
// that guard lives in the wall/sprite renderer, not here.
pub fn draw_column(
    framebuffer: &mut Framebuffer,
    texture: &Texture<'_>,
    x: usize,
    y_hi: isize,
    y_lo: isize,
    u: f32,
    transparency: bool,
) {
    debug_assert!(y_lo > y_hi, "draw_column requires a nonempty, positive run");
    debug_assert!((0.0..=1.0).contains(&u), "u out of range: {u}");

    let ylen = (y_lo - y_hi) as f32;
    let tex_w = texture.width();
    let tex_h = texture.height();
    let tx = (u * (tex_w - 1) as f32) as usize;
    let ty_stride = (tex_h - 1) as f32 / ylen;

    let (mut ty, mut y_hi_clamped) = (0.0f32, y_hi);
    if y_hi < 0 {
        // top-clipped: advance the texture coordinate to where the run would
        // have started, so the visible part still samples the right rows
        ty = (-y_hi as f32 / ylen) * (tex_h - 1) as f32;
        y_hi_clamped = 0;
    }
    let y_lo_clamped = y_lo.min(framebuffer.height() as isize);

    let width = framebuffer.width();
    let pixels = framebuffer.pixels_mut();
    for row in y_hi_clamped..y_lo_clamped {
        let (r, g, b) = texture.texel_rgb(tx, ty as usize);
        ty += ty_stride;
        if transparency && (r, g, b) == CHROMA_KEY {
            continue;
        }
        set_rgb(&mut pixels[row as usize * width + x], r, g, b);
    }
}
