//! Direction input policy while playing.

use crate::engine::InputSnapshot;
use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayingCommand {
    Turn(Direction),
    BackToMenu,
    Nothing,
}

/// First actionable key wins, in the order up, down, left, right, escape.
/// A turn straight back onto `heading` (the direction of the last step) is
/// not actionable, so it falls through to the next held key.
pub fn read_playing_input(input: &InputSnapshot, heading: Direction) -> PlayingCommand {
    let requested = [
        (input.up, Direction::Up),
        (input.down, Direction::Down),
        (input.left, Direction::Left),
        (input.right, Direction::Right),
    ];
    for (held, direction) in requested {
        if held && direction != heading.opposite() {
            return PlayingCommand::Turn(direction);
        }
    }
    if input.back {
        return PlayingCommand::BackToMenu;
    }
    PlayingCommand::Nothing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_rejected_and_perpendicular_turns_accepted() {
        let left = InputSnapshot { left: true, ..Default::default() };
        assert_eq!(read_playing_input(&left, Direction::Right), PlayingCommand::Nothing);

        let down = InputSnapshot { down: true, ..Default::default() };
        assert_eq!(read_playing_input(&down, Direction::Right), PlayingCommand::Turn(Direction::Down));

        let up = InputSnapshot { up: true, ..Default::default() };
        assert_eq!(read_playing_input(&up, Direction::Right), PlayingCommand::Turn(Direction::Up));
    }

    #[test]
    fn vertical_keys_win_over_horizontal() {
        let both = InputSnapshot { up: true, left: true, ..Default::default() };
        assert_eq!(read_playing_input(&both, Direction::Right), PlayingCommand::Turn(Direction::Up));

        let opposed = InputSnapshot { up: true, down: true, ..Default::default() };
        assert_eq!(read_playing_input(&opposed, Direction::Left), PlayingCommand::Turn(Direction::Up));
    }

    #[test]
    fn blocked_key_falls_through_to_the_next_one() {
        let input = InputSnapshot { down: true, right: true, ..Default::default() };
        assert_eq!(read_playing_input(&input, Direction::Up), PlayingCommand::Turn(Direction::Right));
    }

    #[test]
    fn escape_only_when_no_direction_is_held() {
        let back = InputSnapshot { back: true, ..Default::default() };
        assert_eq!(read_playing_input(&back, Direction::Up), PlayingCommand::BackToMenu);

        let steer_and_back = InputSnapshot { left: true, back: true, ..Default::default() };
        assert_eq!(read_playing_input(&steer_and_back, Direction::Up), PlayingCommand::Turn(Direction::Left));
    }
}
