use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of doors in play. The host logic relies on there being exactly three.
pub const DOOR_COUNT: u8 = 3;

/// One of the three doors, identified by 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

/// The full door set, in identifier order.
pub const DOORS: [Door; DOOR_COUNT as usize] = [Door(0), Door(1), Door(2)];

impl Door {
    /// Returns the door with the given identifier, or `None` outside 0..3.
    pub fn new(id: u8) -> Option<Self> {
        (id < DOOR_COUNT).then_some(Door(id))
    }

    pub fn id(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Door {
    type Error = SimError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Door::new(id).ok_or(SimError::InvalidDoor(id))
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.0
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Door {}", self.0)
    }
}

/// What the player does once the host has revealed a goat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub fn all() -> [Strategy; 2] {
        [Strategy::Stay, Strategy::Switch]
    }

    pub fn from_switch(switch: bool) -> Self {
        if switch {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }

    pub fn switches(self) -> bool {
        matches!(self, Strategy::Switch)
    }

    /// Chart category label.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Stay => "Stay",
            Strategy::Switch => "Switch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single played game. Built and dropped inside one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub prize: Door,
    pub initial_choice: Door,
    pub opened: Door,
    pub final_choice: Door,
    pub strategy: Strategy,
}

impl GameRecord {
    pub fn won(&self) -> bool {
        self.final_choice == self.prize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_new_bounds() {
        assert_eq!(Door::new(0), Some(DOORS[0]));
        assert_eq!(Door::new(2).map(Door::id), Some(2));
        assert_eq!(Door::new(3), None);
    }

    #[test]
    fn test_door_deserializes_only_known_ids() {
        assert_eq!(serde_json::from_str::<Door>("1").unwrap(), DOORS[1]);
        assert_eq!(serde_json::to_string(&DOORS[2]).unwrap(), "2");
        assert!(serde_json::from_str::<Door>("7").is_err());
        assert_eq!(Door::try_from(3), Err(SimError::InvalidDoor(3)));
    }

    #[test]
    fn test_strategy_switch_flag() {
        assert_eq!(Strategy::from_switch(true), Strategy::Switch);
        assert_eq!(Strategy::from_switch(false), Strategy::Stay);
        assert!(Strategy::Switch.switches());
        assert!(!Strategy::Stay.switches());
    }

    #[test]
    fn test_strategy_serializes_lowercase() {
        let json = serde_json::to_string(&Strategy::Switch).unwrap();
        assert_eq!(json, "\"switch\"");
    }
}
