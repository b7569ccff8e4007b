//! Capability tags for collision-group classification.
//!
//! An entity participates in zero or more collision/interaction categories.
//! Instead of marker mix-in types, membership is plain data: a small bitmask
//! checked once by the classification function when the entity enters or
//! leaves the world.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

/// A role an entity may hold in the collision pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    DamagesPlayer,
    DamagesPlayerShots,
    DocksWithPlayer,
    Pickup,
    Player,
    PlayerShot,
    Explosion,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::DamagesPlayer,
        Capability::DamagesPlayerShots,
        Capability::DocksWithPlayer,
        Capability::Pickup,
        Capability::Player,
        Capability::PlayerShot,
        Capability::Explosion,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Bitmask of [`Capability`] values carried by an entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tags(u8);

impl Tags {
    pub const EMPTY: Tags = Tags(0);

    pub fn of(caps: &[Capability]) -> Self {
        caps.iter().fold(Tags::EMPTY, |tags, cap| tags.with(*cap))
    }

    pub fn with(self, cap: Capability) -> Self {
        Tags(self.0 | cap.bit())
    }

    pub fn contains(self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// The set of capabilities present, in declaration order. This is the
    /// single classification point deciding group membership; call it at
    /// spawn and at kill, never inside update loops.
    pub fn classify(self) -> SmallVec<[Capability; 4]> {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.contains(*cap))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_hold_multiple_capabilities() {
        let tags = Tags::of(&[Capability::DamagesPlayer, Capability::DamagesPlayerShots]);
        assert!(tags.contains(Capability::DamagesPlayer));
        assert!(tags.contains(Capability::DamagesPlayerShots));
        assert!(!tags.contains(Capability::Pickup));
    }

    #[test]
    fn classify_lists_exactly_the_present_capabilities() {
        let tags = Tags::of(&[Capability::Pickup]);
        assert_eq!(tags.classify().as_slice(), [Capability::Pickup]);
        assert!(Tags::EMPTY.classify().is_empty());
        assert_eq!(Tags::of(&Capability::ALL).classify().len(), 7);
    }
}
