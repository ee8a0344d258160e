//! Drawable entities.
//!
//! The set of kinds is closed, so entities are a tagged variant rather than
//! trait objects.

use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use macroquad::shapes::{draw_circle, draw_line, draw_rectangle};

use crate::engine::assets::TextureHandle;

#[derive(Clone)]
pub enum EntityKind {
    Sprite { texture: TextureHandle },
    Rectangle { width: f32, height: f32, color: Color },
    Circle { radius: f32, color: Color },
}

#[derive(Clone)]
pub struct Entity {
    pub pos: Vec2,
    /// Pixels per millisecond.
    pub velocity: Vec2,
    pub kind: EntityKind,
}

impl Entity {
    pub fn sprite(x: f32, y: f32, texture: TextureHandle) -> Self {
        Self::at(x, y, EntityKind::Sprite { texture })
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self::at(x, y, EntityKind::Rectangle { width, height, color })
    }

    pub fn circle(x: f32, y: f32, radius: f32, color: Color) -> Self {
        Self::at(x, y, EntityKind::Circle { radius, color })
    }

    fn at(x: f32, y: f32, kind: EntityKind) -> Self {
        Self {
            pos: vec2(x, y),
            velocity: Vec2::ZERO,
            kind,
        }
    }

    pub fn update(&mut self, delta_ms: f32) {
        self.pos += self.velocity * delta_ms;
    }

    pub fn render(&self) {
        match &self.kind {
            EntityKind::Sprite { texture } => texture.render(self.pos.x, self.pos.y),
            EntityKind::Rectangle {
                width,
                height,
                color,
            } => draw_rectangle(self.pos.x, self.pos.y, *width, *height, *color),
            EntityKind::Circle { radius, color } => {
                draw_circle(self.pos.x, self.pos.y, *radius, *color)
            }
        }
    }
}

/// Entities that are updated and drawn together, in insertion order.
#[derive(Clone, Default)]
pub struct EntityList {
    entities: Vec<Entity>,
}

impl EntityList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn update(&mut self, delta_ms: f32) {
        for entity in &mut self.entities {
            entity.update(delta_ms);
        }
    }

    pub fn render(&self) {
        for entity in &self.entities {
            entity.render();
        }
    }
}

/// Closed outline through four points, rotated about the origin by `rotation`
/// radians.
pub fn draw_quad(points: [Vec2; 4], color: Color, rotation: f32) {
    let corners = if rotation == 0.0 {
        points
    } else {
        let (sin, cos) = rotation.sin_cos();
        points.map(|p| vec2(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
    };
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        draw_line(a.x, a.y, b.x, b.y, 1.0, color);
    }
}
