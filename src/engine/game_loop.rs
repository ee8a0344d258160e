//! Window creation and the main loop.
//!
//! One thread polls input, computes the frame delta, updates and renders the
//! game, then waits for the next frame. A close request clears the running
//! flag; the loop finishes the current iteration before shutting down.

use std::future::Future;
use std::time::Instant;

use log::{debug, info};
use macroquad::Window;
use macroquad::input::prevent_quit;
use macroquad::miniquad::conf::Platform;
use macroquad::text::draw_text;
use macroquad::window::{Conf, clear_background, next_frame, screen_height};

use crate::config::settings::{Settings, WindowSettings};
use crate::engine::assets::color;
use crate::engine::frame_clock::FrameClock;
use crate::engine::input::InputSnapshot;
use crate::error::EngineError;

/// Callbacks the engine drives once per frame, in declaration order.
pub trait Game {
    fn on_event(&mut self, input: &InputSnapshot);
    fn on_update(&mut self, delta_ms: f32);
    fn on_render(&self);
    fn on_destroy(&mut self) {}
}

pub struct Engine {
    settings: Settings,
}

impl Engine {
    /// Validate settings. On error the window is never opened.
    pub fn create(settings: Settings) -> Result<Self, EngineError> {
        settings.validate()?;
        let WindowSettings {
            title,
            width,
            height,
            vsync,
            fullscreen,
            ..
        } = &settings.window;
        info!(
            "[Engine] Creating \"{}\" {}x{} vsync={} fullscreen={}",
            title, width, height, vsync, fullscreen
        );
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Open the window and run until quit. `build` runs once the graphics
    /// context exists, so it is where assets get loaded.
    pub fn start<G, F, Fut>(self, build: F)
    where
        G: Game + 'static,
        F: FnOnce(Settings) -> Fut + 'static,
        Fut: Future<Output = G> + 'static,
    {
        let conf = window_conf(&self.settings.window);
        let settings = self.settings;
        Window::from_config(conf, async move {
            let game = build(settings.clone()).await;
            run(game, &settings).await;
        });
    }
}

fn window_conf(window: &WindowSettings) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width as i32,
        window_height: window.height as i32,
        fullscreen: window.fullscreen,
        window_resizable: false,
        platform: Platform {
            swap_interval: Some(if window.vsync { 1 } else { 0 }),
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn run<G: Game>(mut game: G, settings: &Settings) {
    prevent_quit();
    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;

    let background = color(settings.palette.background);
    let text_color = color(settings.palette.text);
    let mut clock = FrameClock::new(now_ms());
    let mut running = true;

    while running {
        let input = InputSnapshot::poll();
        if input.quit {
            info!("[Engine] Quit requested");
            running = false;
        }

        let delta_ms = clock.tick(now_ms());
        clear_background(background);

        game.on_event(&input);
        game.on_update(delta_ms);
        game.on_render();

        if let Some(fps) = clock.sample(now_ms()) {
            debug!("[Engine] {} FPS - {}ms", fps, delta_ms);
        }
        if settings.window.show_fps {
            let label = format!("{} FPS - {}ms", clock.current_fps(), delta_ms);
            draw_text(&label, 4.0, screen_height() - 6.0, 16.0, text_color);
        }

        next_frame().await;
    }

    game.on_destroy();
    info!("[Engine] Shut down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.game.moves_per_second = -1.0;
        assert!(Engine::create(settings).is_err());
    }

    #[test]
    fn window_conf_follows_settings() {
        let mut settings = Settings::default();
        settings.window.vsync = true;
        settings.window.title = "Snake test".to_string();

        let conf = window_conf(&settings.window);
        assert_eq!(conf.window_title, "Snake test");
        assert_eq!((conf.window_width, conf.window_height), (640, 480));
        assert_eq!(conf.platform.swap_interval, Some(1));
        assert!(!conf.fullscreen);
    }
}
