//! Texture, font and sound handles.
//!
//! A handle that failed to load stays in the unloaded state: rendering it
//! draws nothing and playing it does nothing. Load failures are logged, never
//! returned. Resources are released when the handle is dropped.

use log::{debug, warn};
use macroquad::audio::{Sound, load_sound, play_sound_once};
use macroquad::color::{Color, WHITE};
use macroquad::math::{Rect, Vec2, vec2};
use macroquad::text::{Font, TextParams, draw_text_ex, load_ttf_font, measure_text};
use macroquad::texture::{DrawTextureParams, Texture2D, draw_texture_ex, load_texture};

use crate::config::settings::Rgba;

pub fn color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Optional arguments for [`TextureHandle::render_ex`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub clip: Option<Rect>,
    /// Degrees, clockwise.
    pub angle: f32,
    pub center: Option<Vec2>,
    pub flip_x: bool,
    pub flip_y: bool,
    pub alpha: u8,
    pub scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            clip: None,
            angle: 0.0,
            center: None,
            flip_x: false,
            flip_y: false,
            alpha: 255,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Default)]
pub struct TextureHandle {
    texture: Option<Texture2D>,
}

impl TextureHandle {
    pub fn unloaded() -> Self {
        Self { texture: None }
    }

    pub async fn load(path: &str) -> Self {
        match load_texture(path).await {
            Ok(texture) => {
                debug!("[Assets] Loaded texture {} ({}x{})", path, texture.width(), texture.height());
                Self {
                    texture: Some(texture),
                }
            }
            Err(e) => {
                warn!("[Assets] Could not load the texture from {}: {:?}", path, e);
                Self::unloaded()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Pixel size, `(0, 0)` when unloaded.
    #[cfg(test)]
    pub fn size(&self) -> (f32, f32) {
        self.texture
            .as_ref()
            .map(|t| (t.width(), t.height()))
            .unwrap_or((0.0, 0.0))
    }

    pub fn render(&self, x: f32, y: f32) {
        self.render_ex(x, y, RenderOptions::default());
    }

    pub fn render_ex(&self, x: f32, y: f32, options: RenderOptions) {
        let Some(texture) = &self.texture else {
            return;
        };
        let (w, h) = match options.clip {
            Some(clip) => (clip.w, clip.h),
            None => (texture.width(), texture.height()),
        };
        let tint = Color {
            a: options.alpha as f32 / 255.0,
            ..WHITE
        };
        draw_texture_ex(
            texture,
            x,
            y,
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(w * options.scale, h * options.scale)),
                source: options.clip,
                rotation: options.angle.to_radians(),
                flip_x: options.flip_x,
                flip_y: options.flip_y,
                pivot: options.center,
            },
        );
    }
}

#[derive(Default)]
pub struct SoundEffect {
    sound: Option<Sound>,
}

impl SoundEffect {
    pub fn unloaded() -> Self {
        Self { sound: None }
    }

    pub async fn load(path: &str) -> Self {
        match load_sound(path).await {
            Ok(sound) => Self { sound: Some(sound) },
            Err(e) => {
                warn!("[Assets] Failed to load sound effect {}: {:?}", path, e);
                Self::unloaded()
            }
        }
    }

    /// Fire and forget. Returns `false` when nothing was loaded.
    pub fn play(&self) -> bool {
        match &self.sound {
            Some(sound) => {
                play_sound_once(sound);
                true
            }
            None => false,
        }
    }
}

/// Text drawn with a loaded font. Changing the text re-renders it entirely.
pub struct TextTexture {
    font: Option<Font>,
    font_size: u16,
    text: String,
    color: Color,
    width: f32,
    height: f32,
}

impl TextTexture {
    pub fn without_font(font_size: u16) -> Self {
        Self {
            font: None,
            font_size,
            text: String::new(),
            color: WHITE,
            width: 0.0,
            height: 0.0,
        }
    }

    pub async fn load(path: &str, font_size: u16) -> Self {
        match load_ttf_font(path).await {
            Ok(font) => Self {
                font: Some(font),
                ..Self::without_font(font_size)
            },
            Err(e) => {
                warn!("[Assets] Could not load the font {}: {:?}", path, e);
                Self::without_font(font_size)
            }
        }
    }

    /// Returns `false`, logs and keeps the previous (empty) text when no font
    /// is attached.
    pub fn set_text(&mut self, text: &str, rgba: Rgba) -> bool {
        let Some(font) = &self.font else {
            warn!("[Assets] No font associated with this text, skipping \"{}\"", text);
            return false;
        };
        let dims = measure_text(text, Some(font), self.font_size, 1.0);
        self.text = text.to_string();
        self.color = color(rgba);
        self.width = dims.width;
        self.height = dims.height;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Draw with the top-left corner at `(x, y)`.
    pub fn render(&self, x: f32, y: f32) {
        let Some(font) = &self.font else {
            return;
        };
        if self.text.is_empty() {
            return;
        }
        draw_text_ex(
            &self.text,
            x,
            y + self.height,
            TextParams {
                font: Some(font),
                font_size: self.font_size,
                color: self.color,
                ..Default::default()
            },
        );
    }
}
