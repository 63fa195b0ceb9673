//! Blits `raycast_core`'s `0xAARRGGBB` framebuffer to a raylib window.
//! Grounded on the teacher's `framebuffer.rs::swap_buffers`: build a raylib
//! `Image` from the rendered pixels, upload it as a texture, and
//! letterbox-scale it into the window without stretching.

use raylib::prelude::*;

pub struct HostFramebuffer {
    width: i32,
    height: i32,
}

impl HostFramebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn present(&self, window: &mut RaylibHandle, thread: &RaylibThread, pixels: &[u32], fps: i32) {
        let mut image = Image::gen_image_color(self.width, self.height, Color::BLACK);
        for y in 0..self.height {
            for x in 0..self.width {
                let argb = pixels[(y * self.width + x) as usize];
                let r = ((argb >> 16) & 0xFF) as u8;
                let g = ((argb >> 8) & 0xFF) as u8;
                let b = (argb & 0xFF) as u8;
                image.draw_pixel(x, y, Color::new(r, g, b, 255));
            }
        }

        let Ok(texture) = window.load_texture_from_image(thread, &image) else {
            return;
        };

        let screen_w = window.get_screen_width();
        let screen_h = window.get_screen_height();
        let fb_w = self.width as f32;
        let fb_h = self.height as f32;
        let screen_aspect = screen_w as f32 / screen_h as f32;
        let fb_aspect = fb_w / fb_h;

        let (dest_w, dest_h) = if fb_aspect > screen_aspect {
            (screen_w as f32, screen_w as f32 / fb_aspect)
        } else {
            (screen_h as f32 * fb_aspect, screen_h as f32)
        };
        let dest_x = (screen_w as f32 - dest_w) / 2.0;
        let dest_y = (screen_h as f32 - dest_h) / 2.0;

        let src = Rectangle::new(0.0, 0.0, fb_w, fb_h);
        let dest = Rectangle::new(dest_x, dest_y, dest_w, dest_h);

        let mut renderer = window.begin_drawing(thread);
        renderer.clear_background(Color::BLACK);
        renderer.draw_texture_pro(&texture, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);

        let text = format!("FPS: {fps}");
        renderer.draw_rectangle(10, 10, 90, 26, Color::new(0, 0, 0, 120));
        renderer.draw_text(&text, 16, 14, 20, Color::RAYWHITE);
    }
}
