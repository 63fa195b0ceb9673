//! Demo host: owns the raylib window, the keyboard scancode snapshot and
//! PNG texture loading, and drives `raycast_core::Engine` through one
//! `update` then `render` per frame. None of this is part of the core's
//! public contract -- a host is free to supply its own window, input, and
//! asset pipeline instead.

mod assets;
mod config;
mod framebuffer;
mod input;
mod level;

use raycast_core::{consts, Engine, Scene};
use raylib::prelude::*;

const WINDOW_WIDTH: i32 = 960;
const WINDOW_HEIGHT: i32 = 1280;

fn main() {
    env_logger::init();

    let config = config::HostConfig::from_env();
    let level = level::load(config.level_path.as_deref()).unwrap_or_else(|err| {
        log::error!("{err}, falling back to the bundled default level");
        level::load(None).expect("bundled default level must always parse")
    });

    let assets = assets::AssetStore::load(None);
    let textures = assets.texture_dict();
    let sprite_textures = assets.sprite_dict();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("raycast-host")
        .log_level(TraceLogLevel::LOG_WARNING)
        .build();

    let mut engine = Engine::new(consts::WIDTH, consts::HEIGHT, level.spawn);
    let host_framebuffer = framebuffer::HostFramebuffer::new(consts::WIDTH, consts::HEIGHT);
    let mut input = input::HostInput::new();

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let snapshot = input.poll(&rl);
        engine.update(dt, snapshot, &level.grid);

        let scene = Scene {
            grid: &level.grid,
            textures: &textures,
            sprite_textures: &sprite_textures,
            sprites: &level.sprites,
        };
        engine.render(&scene);

        let fps = rl.get_fps();
        host_framebuffer.present(&mut rl, &thread, engine.framebuffer().pixels(), fps as i32);
    }
}
