use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Logical keys the renderer reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

/// Walk direction along the heading
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementIntent {
    Forward,
    Backward,
    #[default]
    None,
}

impl MovementIntent {
    /// Sign applied to the movement speed
    pub fn sign(self) -> f32 {
        match self {
            MovementIntent::Forward => 1.0,
            MovementIntent::Backward => -1.0,
            MovementIntent::None => 0.0,
        }
    }
}

/// Rotation direction; right turns increase the heading
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnIntent {
    Left,
    Right,
    #[default]
    None,
}

impl TurnIntent {
    /// Sign applied to the turn speed
    pub fn sign(self) -> f32 {
        match self {
            TurnIntent::Left => -1.0,
            TurnIntent::Right => 1.0,
            TurnIntent::None => 0.0,
        }
    }
}

/// A value on one intent axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Movement(MovementIntent),
    Turn(TurnIntent),
}

/// Logical key -> intent set while the key is held
pub const KEY_BINDINGS: [(Key, Intent); 4] = [
    (Key::Forward, Intent::Movement(MovementIntent::Forward)),
    (Key::Backward, Intent::Movement(MovementIntent::Backward)),
    (Key::TurnLeft, Intent::Turn(TurnIntent::Left)),
    (Key::TurnRight, Intent::Turn(TurnIntent::Right)),
];

pub fn intent_for(key: Key) -> Intent {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, intent)| intent)
        .unwrap_or(Intent::Movement(MovementIntent::None))
}

/// Key went down: set its axis to the bound value
pub fn press(player: &mut Player, key: Key) {
    match intent_for(key) {
        Intent::Movement(intent) => player.set_movement_intent(intent),
        Intent::Turn(intent) => player.set_turn_intent(intent),
    }
}

/// Key went up: reset its axis to neutral, whatever else is held
pub fn release(player: &mut Player, key: Key) {
    match intent_for(key) {
        Intent::Movement(_) => player.set_movement_intent(MovementIntent::None),
        Intent::Turn(_) => player.set_turn_intent(TurnIntent::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_bound() {
        for key in [Key::Forward, Key::Backward, Key::TurnLeft, Key::TurnRight] {
            assert!(KEY_BINDINGS.iter().any(|(bound, _)| *bound == key));
        }
    }

    #[test]
    fn test_press_and_release() {
        let mut player = Player::new(50.0, 50.0);

        press(&mut player, Key::Forward);
        press(&mut player, Key::TurnLeft);
        assert_eq!(player.walk, MovementIntent::Forward);
        assert_eq!(player.turn, TurnIntent::Left);

        release(&mut player, Key::TurnLeft);
        assert_eq!(player.turn, TurnIntent::None);
        assert_eq!(player.walk, MovementIntent::Forward);
    }

    #[test]
    fn test_release_resets_axis_even_with_other_key_held() {
        let mut player = Player::new(50.0, 50.0);

        press(&mut player, Key::Forward);
        press(&mut player, Key::Backward);
        assert_eq!(player.walk, MovementIntent::Backward);

        // Forward is still physically held, but the axis goes neutral
        release(&mut player, Key::Backward);
        assert_eq!(player.walk, MovementIntent::None);
    }

    #[test]
    fn test_press_is_idempotent() {
        let mut player = Player::new(50.0, 50.0);
        press(&mut player, Key::TurnRight);
        press(&mut player, Key::TurnRight);
        assert_eq!(player.turn, TurnIntent::Right);
    }
}
