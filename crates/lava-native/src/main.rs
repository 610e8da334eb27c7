//! Desktop host for the lava lamp: the window is the surface, occlusion is
//! visibility, and the cursor feeds the pointer signal.
//!
//! Usage: `lava-native [config.toml]`

use anyhow::Context;
use instant::Instant;
use lava_core::{EffectConfig, LavaDriver, PointerSignal};
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod backend;
mod keys;

use backend::{NativeBackend, RedrawScheduler};

fn load_config(path: Option<String>) -> anyhow::Result<EffectConfig> {
    let Some(path) = path else {
        return Ok(EffectConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let config = toml::from_str(&text).with_context(|| format!("parsing {}", path))?;
    log::info!("[config] loaded {}", path);
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = load_config(std::env::args().nth(1))?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Lava Lamp (native)")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_transparent(config.transparent)
            .build(&event_loop)?,
    );

    let gpu = pollster::block_on(backend::init_gpu(window.clone()))?;
    let mut driver = LavaDriver::new(
        NativeBackend::new(window.clone(), gpu),
        RedrawScheduler::new(window.clone()),
        config,
    );
    driver.set_visible(true);

    let start = Instant::now();
    let mut pointer = PointerSignal::default();
    let mut palette_index = 0usize;

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                driver.teardown();
                elwt.exit();
            }
            WindowEvent::Occluded(occluded) => driver.set_visible(!occluded),
            WindowEvent::Resized(size) => driver.on_resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                driver.on_frame(start.elapsed().as_secs_f64() * 1000.0);
            }
            WindowEvent::CursorEntered { .. } => {
                pointer.inside = true;
                driver.on_pointer(pointer);
            }
            WindowEvent::CursorLeft { .. } => {
                pointer.inside = false;
                driver.on_pointer(pointer);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = window.inner_size();
                pointer.normalized_x = position.x as f32 / size.width.max(1) as f32;
                pointer.normalized_y = position.y as f32 / size.height.max(1) as f32;
                driver.on_pointer(pointer);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match keys::shortcut_for(&logical_key) {
                Some(keys::Shortcut::Quit) => {
                    driver.teardown();
                    elwt.exit();
                }
                Some(shortcut) => {
                    driver.configure(|c| keys::apply(shortcut, c, &mut palette_index));
                    let c = driver.config();
                    log::info!(
                        "[config] speed={:.2} balls={} mouse={}",
                        c.speed,
                        c.effective_ball_count(),
                        c.mouse_interaction_enabled
                    );
                }
                None => {}
            },
            _ => {}
        }
    })?;
    Ok(())
}
