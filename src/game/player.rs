use super::board::Slot;

/// One of the two participants' symbols. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The opposing player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The slot value this player's pieces occupy.
    pub fn slot(self) -> Slot {
        match self {
            Player::Red => Slot::Red,
            Player::Yellow => Slot::Yellow,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Player::Red.opponent(), Player::Yellow);
        assert_eq!(Player::Yellow.opponent(), Player::Red);
        assert_eq!(Player::Red.opponent().opponent(), Player::Red);
    }

    #[test]
    fn test_slot_mapping() {
        assert_eq!(Player::Red.slot(), Slot::Red);
        assert_eq!(Player::Yellow.slot(), Slot::Yellow);
    }
}
