// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use quarterchain::{
    config::*,
    views::{Stage, StagePhase},
};

struct Model {
    // Core components:
    stage: Stage,

    // Rendering components:
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,

    // FPS
    last_update: Instant,
    fps: f32,

    // Overlay
    debug_flag: bool,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to the built-in stage settings
    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("{}; using default config", err);
        Config::default()
    });
    log::info!(
        "{} nodes x {} wedges, {}ms ticks, {}x{} surface",
        config.chain.node_count,
        config.chain.wedge_count,
        config.animation.tick_ms,
        config.window.width,
        config.window.height
    );

    // load() validated the config and the default is valid
    let stage = Stage::new(&config).expect("Config failed validation");

    // Create window
    let window_id = app
        .new_window()
        .title("quarterchain")
        .size(config.window.width, config.window.height)
        .resizable(false)
        .msaa_samples(1)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");
    let window = app.window(window_id).expect("Window closed during setup");

    // Set up render texture. The surface size is fixed for the life of the app.
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([config.window.width, config.window.height])
        // RENDER_ATTACHMENT for the `Draw` render pass, sampled by the reshaper
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(config.rendering.texture_samples)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    // Set up rendering pipeline
    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());
    let sample_count = window.msaa_samples();

    // Create the texture reshaper.
    let texture_view = texture.view().build();
    let texture_sample_count = texture.sample_count();
    let texture_sample_type = texture.sample_type();
    let dst_format = Frame::TEXTURE_FORMAT;
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture_sample_count,
        texture_sample_type,
        sample_count,
        dst_format,
    );

    Model {
        stage,

        texture,
        draw,
        draw_renderer,
        texture_reshaper,

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.stage.tap();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // same as a click
        Key::Space => {
            model.stage.tap();
        }
        Key::P => {
            model.debug_flag = !model.debug_flag;
            model.stage.request_redraw();
        }
        Key::Q => {
            if model.stage.phase() == StagePhase::Running {
                log::info!("Quitting mid-cycle");
            }
            app.quit();
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    let dt = duration.as_secs_f32();

    // FPS calculation
    if model.debug_flag && dt > 0.0 {
        model.fps = 1.0 / dt;
    }

    let redraw = model.stage.update(dt);

    // The overlay changes every frame, so keep repainting while it is shown
    if !redraw && !model.debug_flag {
        return;
    }

    model.draw.reset();
    model.stage.draw(&model.draw);

    if model.debug_flag {
        draw_debug_overlay(model);
    }

    render_to_texture(app, model);
}

// Draw the last rendered texture into the given Frame
fn view(_app: &App, model: &Model, frame: Frame) {
    //resize texture to screen
    let mut encoder = frame.command_encoder();

    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

// ******************************* Debug Overlay *******************************

fn draw_debug_overlay(model: &Model) {
    let draw = &model.draw;
    let layout = model.stage.layout();

    // Canvas origin is the top-left corner
    let origin = pt2(-layout.width / 2.0, layout.height / 2.0);
    draw.line()
        .points(origin, origin + vec2(50.0, 0.0))
        .color(RED)
        .stroke_weight(1.0);
    draw.line()
        .points(origin, origin - vec2(0.0, 50.0))
        .color(BLUE)
        .stroke_weight(1.0);

    let text = format!("FPS: {:.1}\n{}", model.fps, model.stage.status_line());
    draw.text(&text)
        .x_y(0.0, -layout.height / 2.0 + 30.0)
        .w(layout.width)
        .color(RED);
}

// ******************************* Rendering *****************************

fn render_to_texture(app: &App, model: &mut Model) {
    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Stage renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);
    let texture_view = model.texture.view().build();

    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        1.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
}
