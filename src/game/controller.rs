//! Top-level Snake controller.
//!
//! Owns the game state machine and every entity, routes input and per-frame
//! updates to the handler for the current state, and draws the result.

use log::{debug, info};
use macroquad::math::vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::settings::{AssetPaths, Settings};
use crate::engine::assets::{SoundEffect, TextTexture, TextureHandle, color};
use crate::engine::entity::{Entity, EntityList, draw_quad};
use crate::engine::particles::ParticleEmitter;
use crate::engine::{Game, InputSnapshot};
use crate::game::grid::Grid;
use crate::game::scheduler::MoveScheduler;
use crate::game::state::World;
use crate::game::systems::{
    PlayingCommand, cell_center, format_board, read_playing_input, render_board,
};
use crate::game::types::{GameState, Position};

const SCORE_MARGIN: f32 = 8.0;

pub struct SnakeAssets {
    pub snake: TextureHandle,
    pub apple: TextureHandle,
    pub menu: TextureHandle,
    pub particle: TextureHandle,
    pub eat_sound: SoundEffect,
    pub score_text: TextTexture,
}

impl SnakeAssets {
    pub async fn load(paths: &AssetPaths) -> Self {
        let assets = Self {
            snake: TextureHandle::load(&paths.snake).await,
            apple: TextureHandle::load(&paths.apple).await,
            menu: TextureHandle::load(&paths.menu).await,
            particle: TextureHandle::load(&paths.particle).await,
            eat_sound: SoundEffect::load(&paths.eat_sound).await,
            score_text: TextTexture::load(&paths.font, paths.font_size).await,
        };
        let textures = [&assets.snake, &assets.apple, &assets.menu, &assets.particle];
        let loaded = textures.iter().filter(|t| t.is_loaded()).count();
        info!("[Assets] {}/{} textures loaded", loaded, textures.len());
        assets
    }

    /// Nothing loaded; every draw and play is a no-op.
    pub fn unloaded(font_size: u16) -> Self {
        Self {
            snake: TextureHandle::unloaded(),
            apple: TextureHandle::unloaded(),
            menu: TextureHandle::unloaded(),
            particle: TextureHandle::unloaded(),
            eat_sound: SoundEffect::unloaded(),
            score_text: TextTexture::without_font(font_size),
        }
    }
}

pub struct SnakeGame {
    state: GameState,
    world: World,
    scheduler: MoveScheduler,
    rng: StdRng,
    assets: SnakeAssets,
    settings: Settings,
    cell_size: f32,
    menu_scene: EntityList,
    lose_scene: EntityList,
    emitter: ParticleEmitter,
    burst_remaining_ms: f32,
}

impl SnakeGame {
    pub async fn load(settings: Settings) -> Self {
        let assets = SnakeAssets::load(&settings.assets).await;
        Self::new(settings, assets, StdRng::from_os_rng())
    }

    pub fn new(settings: Settings, assets: SnakeAssets, mut rng: StdRng) -> Self {
        let (grid_width, grid_height) = settings.grid_size();
        let world = World::new(Grid::new(grid_width, grid_height), &settings.game, &mut rng);

        let mut menu_scene = EntityList::new();
        menu_scene.add(Entity::sprite(0.0, 0.0, assets.menu.clone()));

        let mut emitter = ParticleEmitter::new(0.0, 0.0, &settings.particles, assets.particle.clone());
        emitter.emitting = false;

        Self {
            state: GameState::Menu,
            world,
            scheduler: MoveScheduler::new(settings.game.moves_per_second),
            rng,
            assets,
            cell_size: settings.game.cell_size as f32,
            settings,
            menu_scene,
            lose_scene: EntityList::new(),
            emitter,
            burst_remaining_ms: 0.0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }

    pub fn lose_scene(&self) -> &EntityList {
        &self.lose_scene
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    /// Menu or lose screen into a fresh round.
    fn start_playing(&mut self) {
        self.world = World::new(self.world.grid, &self.settings.game, &mut self.rng);
        self.scheduler.reset();
        self.lose_scene.clear();
        self.refresh_score();
        self.state = GameState::Playing;
        info!("[Snake] New round, apple at {:?}", self.world.apple.pos);
    }

    fn enter_lose(&mut self, head: Position) {
        self.state = GameState::Lose;
        info!("[Snake] Lost with score {}", self.world.score);
        debug!("[Snake] Final board:\n{}", format_board(&self.world));
        if let Ok(snapshot) = serde_json::to_string(&self.world) {
            debug!("[Snake] Final round: {}", snapshot);
        }

        let (width, height) = self.board_size();
        let (cx, cy) = cell_center(head, self.cell_size);
        let palette = self.settings.palette;
        self.lose_scene.clear();
        self.lose_scene
            .add(Entity::rectangle(0.0, 0.0, width, height, color(palette.overlay)));
        self.lose_scene
            .add(Entity::circle(cx, cy, self.cell_size / 2.0, color(palette.marker)));
    }

    fn refresh_score(&mut self) {
        let text = format!("Score: {}", self.world.score);
        self.assets.score_text.set_text(&text, self.settings.palette.text);
    }

    fn start_burst(&mut self, cell: Position) {
        let (x, y) = cell_center(cell, self.cell_size);
        self.emitter.move_to(x, y);
        self.emitter.restart_window();
        self.emitter.emitting = true;
        self.burst_remaining_ms = self.settings.particles.burst_ms;
    }

    fn update_playing(&mut self, delta_ms: f32) {
        if !self.scheduler.due(delta_ms) {
            return;
        }
        let outcome = self.world.step(&mut self.rng);
        debug!(
            "[Snake] Move {} this second, head at {:?}",
            self.scheduler.moves_this_window(),
            outcome.head
        );
        if outcome.ate {
            self.assets.eat_sound.play();
            self.refresh_score();
            self.start_burst(outcome.head);
        }
        if outcome.collided {
            self.enter_lose(outcome.head);
        }
    }

    fn update_particles(&mut self, delta_ms: f32) {
        if self.burst_remaining_ms > 0.0 {
            self.burst_remaining_ms -= delta_ms;
            if self.burst_remaining_ms <= 0.0 {
                self.emitter.emitting = false;
            }
        }
        self.emitter.update(delta_ms, &mut self.rng);
    }

    fn board_size(&self) -> (f32, f32) {
        (
            self.world.grid.width as f32 * self.cell_size,
            self.world.grid.height as f32 * self.cell_size,
        )
    }

    /// Top-right corner of the board.
    fn render_score(&self) {
        let (board_width, _) = self.board_size();
        let (text_width, _) = self.assets.score_text.size();
        self.assets
            .score_text
            .render(board_width - text_width - SCORE_MARGIN, SCORE_MARGIN);
    }
}

impl Game for SnakeGame {
    fn on_event(&mut self, input: &InputSnapshot) {
        match self.state {
            GameState::Menu | GameState::Lose => {
                if input.start {
                    self.start_playing();
                }
            }
            GameState::Playing => {
                match read_playing_input(input, self.world.snake.heading) {
                    PlayingCommand::Turn(direction) => self.world.snake.direction = direction,
                    PlayingCommand::BackToMenu => {
                        info!("[Snake] Back to menu");
                        self.state = GameState::Menu;
                    }
                    PlayingCommand::Nothing => {}
                }
            }
            GameState::Pause => {}
        }
    }

    fn on_update(&mut self, delta_ms: f32) {
        match self.state {
            GameState::Playing => self.update_playing(delta_ms),
            GameState::Menu => self.menu_scene.update(delta_ms),
            GameState::Lose => self.lose_scene.update(delta_ms),
            GameState::Pause => {}
        }
        self.update_particles(delta_ms);
    }

    fn on_render(&self) {
        match self.state {
            GameState::Menu => self.menu_scene.render(),
            GameState::Playing | GameState::Pause => {
                render_board(&self.world, &self.assets.snake, &self.assets.apple, self.cell_size);
                self.render_score();
            }
            GameState::Lose => {
                render_board(&self.world, &self.assets.snake, &self.assets.apple, self.cell_size);
                self.lose_scene.render();
                let (width, height) = self.board_size();
                let corners = [
                    vec2(0.0, 0.0),
                    vec2(width - 1.0, 0.0),
                    vec2(width - 1.0, height - 1.0),
                    vec2(0.0, height - 1.0),
                ];
                draw_quad(corners, color(self.settings.palette.marker), 0.0);
                self.render_score();
            }
        }
        self.emitter.render();
    }

    fn on_destroy(&mut self) {
        info!("[Snake] Closing with score {}", self.world.score);
    }
}
