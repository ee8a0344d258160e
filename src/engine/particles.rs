//! Particle emitter backed by a fixed-size ring buffer.
//!
//! The pool is allocated once. New particles take the next slot in ring
//! order, overwriting whatever lived there. Each particle fades out linearly
//! over its lifetime and goes inactive once its remaining lifetime hits zero.

use log::debug;
use rand::Rng;

use crate::config::settings::ParticleSettings;
use crate::engine::assets::{RenderOptions, TextureHandle};

const WINDOW_MS: f32 = 1000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub x_velocity: f32,
    pub y_velocity: f32,
    pub total_lifetime: f32,
    pub lifetime_remaining: f32,
    pub active: bool,
}

impl Particle {
    /// Remaining share of the lifetime, 1.0 at spawn and 0.0 at expiry.
    pub fn life_fraction(&self) -> f32 {
        if !self.active || self.total_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime_remaining / self.total_lifetime).clamp(0.0, 1.0)
    }

    pub fn alpha(&self) -> u8 {
        (255.0 * self.life_fraction()).floor() as u8
    }

    /// Size multiplier, `start` at spawn moving linearly to `end` at expiry.
    pub fn size_scale(&self, start: f32, end: f32) -> f32 {
        end + (start - end) * self.life_fraction()
    }
}

pub struct ParticleEmitter {
    /// Gates update and render entirely.
    pub active: bool,
    /// Gates spawning only; live particles keep fading while this is off.
    pub emitting: bool,
    x: f32,
    y: f32,
    lifetime_ms: f32,
    speed: f32,
    per_second: u32,
    start_size: f32,
    end_size: f32,
    texture: TextureHandle,
    pool: Box<[Particle]>,
    next_slot: usize,
    window_elapsed_ms: f32,
    created_this_window: u32,
}

impl ParticleEmitter {
    pub fn new(x: f32, y: f32, settings: &ParticleSettings, texture: TextureHandle) -> Self {
        let capacity = settings.capacity.max(1);
        Self {
            active: true,
            emitting: true,
            x,
            y,
            lifetime_ms: settings.lifetime_ms,
            speed: settings.speed,
            per_second: settings.per_second,
            start_size: settings.start_size,
            end_size: settings.end_size,
            texture,
            pool: vec![Particle::default(); capacity].into_boxed_slice(),
            next_slot: 0,
            window_elapsed_ms: 0.0,
            created_this_window: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.pool.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.pool
    }

    pub fn active_count(&self) -> usize {
        self.pool.iter().filter(|p| p.active).count()
    }

    /// Origin for particles spawned from now on.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Start a fresh spawn window, e.g. when a burst begins.
    pub fn restart_window(&mut self) {
        self.window_elapsed_ms = 0.0;
        self.created_this_window = 0;
    }

    pub fn update<R: Rng>(&mut self, delta_ms: f32, rng: &mut R) {
        if !self.active {
            return;
        }
        if self.emitting {
            let due = self.spawns_due(delta_ms).min(self.pool.len());
            for _ in 0..due {
                self.spawn(rng);
            }
        }

        for particle in self.pool.iter_mut().filter(|p| p.active) {
            particle.lifetime_remaining -= delta_ms;
            if particle.lifetime_remaining <= 0.0 {
                particle.active = false;
                continue;
            }
            particle.x += particle.x_velocity * self.speed * delta_ms;
            particle.y += particle.y_velocity * self.speed * delta_ms;
        }
    }

    /// Spawns owed for this frame. The window resets every second; a window
    /// that closes inside this frame is topped up to its full quota first.
    fn spawns_due(&mut self, delta_ms: f32) -> usize {
        self.window_elapsed_ms += delta_ms;
        let mut due = 0u32;
        while self.window_elapsed_ms >= WINDOW_MS {
            due += self.per_second.saturating_sub(self.created_this_window);
            self.window_elapsed_ms -= WINDOW_MS;
            self.created_this_window = 0;
        }
        let target = (self.window_elapsed_ms * self.per_second as f32 / WINDOW_MS).floor() as u32;
        if target > self.created_this_window {
            due += target - self.created_this_window;
            self.created_this_window = target;
        }
        due as usize
    }

    fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let slot = self.next_slot;
        self.pool[slot] = Particle {
            x: self.x,
            y: self.y,
            x_velocity: rng.random_range(-1.0..=1.0),
            y_velocity: rng.random_range(-1.0..=1.0),
            total_lifetime: self.lifetime_ms,
            lifetime_remaining: self.lifetime_ms,
            active: true,
        };
        self.next_slot = (slot + 1) % self.pool.len();
        if self.next_slot == 0 {
            debug!("[Particles] Pool of {} wrapped", self.pool.len());
        }
    }

    pub fn render(&self) {
        if !self.active {
            return;
        }
        for particle in self.pool.iter().filter(|p| p.active) {
            let scale = particle.size_scale(self.start_size, self.end_size);
            self.texture.render_ex(
                particle.x,
                particle.y,
                RenderOptions {
                    alpha: particle.alpha(),
                    scale,
                    ..RenderOptions::default()
                },
            );
        }
    }
}
