use serde::{Deserialize, Serialize};

use crate::coords::Point;
use crate::species::{CreatureColor, CreatureType};

/// Position and velocity of a creature seen this turn. Both are known
/// together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    pub pos: Point,
    pub vel: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub color: CreatureColor,
    pub kind: CreatureType,
    pub motion: Option<Motion>,
    pub scanned: bool,
    pub saved: bool,
    pub saved_by_foe: bool,
}

impl Creature {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            color: CreatureColor::Unknown,
            kind: CreatureType::Unknown,
            motion: None,
            scanned: false,
            saved: false,
            saved_by_foe: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.motion.is_some()
    }

    pub fn position(&self) -> Option<Point> {
        self.motion.map(|m| m.pos)
    }

    pub fn clear_motion(&mut self) {
        self.motion = None;
    }

    // Color and type are fixed once known.
    pub fn classify(&mut self, color: CreatureColor, kind: CreatureType) {
        if !self.color.is_known() {
            self.color = color;
        }
        if !self.kind.is_known() {
            self.kind = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creature_init() {
        let c = Creature::new(7);
        assert_eq!(c.id, 7);
        assert!(!c.is_visible());
        assert!(c.position().is_none());
        assert!(!c.scanned && !c.saved && !c.saved_by_foe);
        assert_eq!(c.color, CreatureColor::Unknown);
    }

    #[test]
    fn motion_is_all_or_nothing() {
        let mut c = Creature::new(1);
        c.motion = Some(Motion { pos: Point::new(10, 20), vel: Point::new(-1, 2) });
        assert_eq!(c.position(), Some(Point::new(10, 20)));
        c.clear_motion();
        assert!(c.motion.is_none());
    }

    #[test]
    fn classify_keeps_first_known_values() {
        let mut c = Creature::new(1);
        c.classify(CreatureColor::Green, CreatureType::Crab);
        c.classify(CreatureColor::Pink, CreatureType::Squid);
        assert_eq!(c.color, CreatureColor::Green);
        assert_eq!(c.kind, CreatureType::Crab);
    }
}
