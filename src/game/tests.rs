#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::settings::Settings;
    use crate::engine::{Game, InputSnapshot};
    use crate::game::controller::{SnakeAssets, SnakeGame};
    use crate::game::types::{Direction, GameState, Position};

    const FRAME_MS: f32 = 10.0;

    fn game_with_rate(moves_per_second: f32, seed: u64) -> SnakeGame {
        let mut settings = Settings::default();
        settings.game.moves_per_second = moves_per_second;
        let assets = SnakeAssets::unloaded(settings.assets.font_size);
        SnakeGame::new(settings, assets, StdRng::seed_from_u64(seed))
    }

    fn press(game: &mut SnakeGame, input: InputSnapshot) {
        game.on_event(&input);
    }

    fn start(game: &mut SnakeGame) {
        press(game, InputSnapshot { start: true, ..Default::default() });
    }

    /// One frame with nothing held.
    fn frame(game: &mut SnakeGame) {
        game.on_event(&InputSnapshot::default());
        game.on_update(FRAME_MS);
    }

    #[test]
    fn menu_start_then_ten_steps_moves_head_ten_cells() {
        let mut game = game_with_rate(10.0, 1);
        assert_eq!(game.state(), GameState::Menu);

        start(&mut game);
        assert_eq!(game.state(), GameState::Playing);
        let snake = &game.world().snake;
        assert_eq!(snake.segments.len(), 6);
        assert_eq!(snake.head(), Position::new(8, 8));
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(game.world().score, 0);

        game.world_mut().apple.pos = Position::new(0, 0);
        // 100 frames of 10ms at 10 moves/s make exactly 10 steps.
        for _ in 0..100 {
            frame(&mut game);
        }
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.world().snake.head(), Position::new(18, 8));
        assert_eq!(game.world().snake.segments.len(), 6);
    }

    #[test]
    fn closed_loop_loses_exactly_on_the_revisiting_step() {
        // 100 moves/s at 10ms frames: one step per frame.
        let mut game = game_with_rate(100.0, 2);
        start(&mut game);
        game.world_mut().apple.pos = Position::new(0, 0);

        press(&mut game, InputSnapshot { down: true, ..Default::default() });
        game.on_update(FRAME_MS);
        assert_eq!(game.world().snake.head(), Position::new(8, 9));
        assert_eq!(game.state(), GameState::Playing);

        press(&mut game, InputSnapshot { left: true, ..Default::default() });
        game.on_update(FRAME_MS);
        assert_eq!(game.world().snake.head(), Position::new(7, 9));
        assert_eq!(game.state(), GameState::Playing);

        press(&mut game, InputSnapshot { up: true, ..Default::default() });
        game.on_update(FRAME_MS);
        assert_eq!(game.world().snake.head(), Position::new(7, 8));
        assert_eq!(game.state(), GameState::Lose);
        // Overlay plus collision marker.
        assert_eq!(game.lose_scene().len(), 2);
    }

    #[test]
    fn lose_screen_freezes_until_restart() {
        let mut game = game_with_rate(100.0, 3);
        start(&mut game);
        game.world_mut().apple.pos = Position::new(0, 0);
        for held in [
            InputSnapshot { down: true, ..Default::default() },
            InputSnapshot { left: true, ..Default::default() },
            InputSnapshot { up: true, ..Default::default() },
        ] {
            press(&mut game, held);
            game.on_update(FRAME_MS);
        }
        assert_eq!(game.state(), GameState::Lose);

        let frozen = game.world().snake.head();
        for _ in 0..20 {
            frame(&mut game);
        }
        assert_eq!(game.world().snake.head(), frozen);

        start(&mut game);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.world().snake.head(), Position::new(8, 8));
        assert_eq!(game.world().snake.segments.len(), 6);
        assert!(game.lose_scene().is_empty());
    }

    #[test]
    fn reversal_input_is_ignored_while_playing() {
        let mut game = game_with_rate(100.0, 4);
        start(&mut game);
        game.world_mut().apple.pos = Position::new(0, 0);

        press(&mut game, InputSnapshot { left: true, ..Default::default() });
        assert_eq!(game.world().snake.direction, Direction::Right);

        press(&mut game, InputSnapshot { up: true, ..Default::default() });
        assert_eq!(game.world().snake.direction, Direction::Up);
    }

    #[test]
    fn two_turns_between_steps_cannot_fold_back() {
        let mut game = game_with_rate(100.0, 5);
        start(&mut game);
        game.world_mut().apple.pos = Position::new(0, 0);

        // Heading right: up is accepted, then left is still a reversal of
        // the last step taken.
        press(&mut game, InputSnapshot { up: true, ..Default::default() });
        press(&mut game, InputSnapshot { left: true, ..Default::default() });
        assert_eq!(game.world().snake.direction, Direction::Up);

        game.on_update(FRAME_MS);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.world().snake.head(), Position::new(8, 7));
    }

    #[test]
    fn escape_returns_to_menu() {
        let mut game = game_with_rate(10.0, 6);
        start(&mut game);
        press(&mut game, InputSnapshot { back: true, ..Default::default() });
        assert_eq!(game.state(), GameState::Menu);

        // The menu does not advance the snake.
        let head = game.world().snake.head();
        for _ in 0..50 {
            frame(&mut game);
        }
        assert_eq!(game.world().snake.head(), head);
    }

    #[test]
    fn eating_scores_grows_and_bursts_particles() {
        let mut game = game_with_rate(100.0, 7);
        start(&mut game);
        game.world_mut().apple.pos = Position::new(9, 8);

        game.on_update(FRAME_MS);

        let world = game.world();
        assert_eq!(world.score, 1);
        assert_eq!(world.snake.length, 7);
        assert_eq!(world.snake.segments.len(), 7);
        assert!(!world.snake.occupies(world.apple.pos));
        assert!(game.emitter().emitting);

        // Particles spawn on the next frames, then the burst stops.
        for _ in 0..5 {
            frame(&mut game);
        }
        assert!(game.emitter().active_count() > 0);
        for _ in 0..100 {
            frame(&mut game);
        }
        assert!(!game.emitter().emitting);
    }

    #[test]
    fn restart_resets_score() {
        let mut game = game_with_rate(100.0, 8);
        start(&mut game);
        game.world_mut().apple.pos = Position::new(9, 8);
        game.on_update(FRAME_MS);
        assert_eq!(game.world().score, 1);

        press(&mut game, InputSnapshot { back: true, ..Default::default() });
        start(&mut game);
        assert_eq!(game.world().score, 0);
        assert_eq!(game.world().snake.length, 6);
    }

    #[test]
    fn menu_input_never_enters_pause() {
        let mut game = game_with_rate(10.0, 9);
        press(&mut game, InputSnapshot { back: true, up: true, ..Default::default() });
        assert_eq!(game.state(), GameState::Menu);
    }

    #[test]
    fn paused_round_ignores_input_and_time() {
        let mut game = game_with_rate(100.0, 10);
        start(&mut game);
        game.world_mut().apple.pos = Position::new(0, 0);
        game.set_state(GameState::Pause);
        let before = game.world().snake.clone();

        for input in [
            InputSnapshot { start: true, ..Default::default() },
            InputSnapshot { back: true, ..Default::default() },
            InputSnapshot { up: true, ..Default::default() },
        ] {
            game.on_event(&input);
            game.on_update(FRAME_MS);
        }
        for _ in 0..50 {
            game.on_update(FRAME_MS);
        }

        assert_eq!(game.state(), GameState::Pause);
        assert_eq!(game.world().snake.segments, before.segments);
        assert_eq!(game.world().snake.direction, Direction::Right);
        assert_eq!(game.world().score, 0);
    }
}
