//! Badges, user types and the privilege level derived from them.

use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;

use crate::config::ParserConfig;
use crate::error::FieldError;

use super::number;

/// Level attached to a badge, e.g. months for `subscriber` or the cheer tier
/// for `bits`.
pub type BadgeLevel = u32;

/// A chat badge.
///
/// Names without a variant are kept verbatim in [`Badge::Unhandled`], so a
/// decoded badge list never loses information.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Badge {
    Admin,
    Bits,
    Broadcaster,
    GlobalMod,
    Moderator,
    Premium,
    Staff,
    Subscriber,
    Turbo,
    /// Any badge name not listed above.
    Unhandled(String),
}

impl Badge {
    /// Map a wire badge name.
    pub fn from_wire(name: &str, config: &ParserConfig) -> Self {
        match name {
            "admin" => Self::Admin,
            "bits" => Self::Bits,
            "broadcaster" => Self::Broadcaster,
            "global_mod" => Self::GlobalMod,
            "moderator" => Self::Moderator,
            "premium" if config.recognize_premium_badge => Self::Premium,
            "staff" => Self::Staff,
            "subscriber" => Self::Subscriber,
            "turbo" => Self::Turbo,
            other => Self::Unhandled(other.to_owned()),
        }
    }

    /// Wire name of the badge.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Bits => "bits",
            Self::Broadcaster => "broadcaster",
            Self::GlobalMod => "global_mod",
            Self::Moderator => "moderator",
            Self::Premium => "premium",
            Self::Staff => "staff",
            Self::Subscriber => "subscriber",
            Self::Turbo => "turbo",
            Self::Unhandled(name) => name,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The badges of one chatter, keyed by badge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Badges(BTreeMap<Badge, BadgeLevel>);

impl Badges {
    /// Decode a `name/level,name/level` list. An empty value is an empty
    /// list.
    pub fn decode(raw: &str, config: &ParserConfig) -> Result<Self, FieldError> {
        let mut badges = BTreeMap::new();
        if raw.is_empty() {
            return Ok(Self(badges));
        }

        for entry in raw.split(',') {
            let (name, level) = match entry.split_once('/') {
                Some((name, level)) if !name.is_empty() && !level.contains('/') => (name, level),
                _ => return Err(FieldError::MalformedBadge(entry.to_owned())),
            };
            let level = number::<BadgeLevel>(level)?;

            match badges.entry(Badge::from_wire(name, config)) {
                Entry::Vacant(slot) => {
                    slot.insert(level);
                }
                Entry::Occupied(_) => return Err(FieldError::DuplicateBadge(name.to_owned())),
            }
        }

        Ok(Self(badges))
    }

    /// Level of `badge`, if present.
    pub fn get(&self, badge: &Badge) -> Option<BadgeLevel> {
        self.0.get(badge).copied()
    }

    pub fn contains(&self, badge: &Badge) -> bool {
        self.0.contains_key(badge)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Badge, BadgeLevel)> {
        self.0.iter().map(|(badge, level)| (badge, *level))
    }

    /// Privilege level implied by these badges.
    pub fn privilege(&self) -> Privilege {
        if self.contains(&Badge::Broadcaster) {
            Privilege::Broadcaster
        } else if [Badge::Moderator, Badge::GlobalMod, Badge::Admin, Badge::Staff]
            .iter()
            .any(|badge| self.contains(badge))
        {
            Privilege::Moderator
        } else if self.contains(&Badge::Subscriber) {
            Privilege::Subscriber
        } else {
            Privilege::Normal
        }
    }
}

impl<const N: usize> From<[(Badge, BadgeLevel); N]> for Badges {
    fn from(entries: [(Badge, BadgeLevel); N]) -> Self {
        Self(BTreeMap::from(entries))
    }
}

/// Writes the wire form, `name/level` pairs joined by commas.
impl fmt::Display for Badges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (badge, level)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}/{}", badge, level)?;
        }
        Ok(())
    }
}

/// Privilege of a chatter in a channel, ordered from least to most.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Privilege {
    Normal,
    Subscriber,
    Moderator,
    Broadcaster,
}

/// The `user-type` tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserType {
    /// A regular chatter; the tag is empty.
    #[default]
    Empty,
    Mod,
    GlobalMod,
    Admin,
    Staff,
    /// Any other value, kept verbatim.
    Unhandled(String),
}

impl UserType {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "" => Self::Empty,
            "mod" => Self::Mod,
            "global_mod" => Self::GlobalMod,
            "admin" => Self::Admin,
            "staff" => Self::Staff,
            other => Self::Unhandled(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Mod => "mod",
            Self::GlobalMod => "global_mod",
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Unhandled(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> Result<Badges, FieldError> {
        Badges::decode(raw, &ParserConfig::default())
    }

    #[test]
    fn test_decode_badges() {
        let badges = decode("global_mod/1,turbo/1").unwrap();
        assert_eq!(badges.len(), 2);
        assert_eq!(badges.get(&Badge::GlobalMod), Some(1));
        assert_eq!(badges.get(&Badge::Turbo), Some(1));
        assert_eq!(badges, Badges::from([(Badge::Turbo, 1), (Badge::GlobalMod, 1)]));
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_unhandled_badge_is_kept() {
        let badges = decode("vip/1,subscriber/12").unwrap();
        assert_eq!(badges.get(&Badge::Unhandled("vip".to_string())), Some(1));
        assert_eq!(badges.to_string(), "subscriber/12,vip/1");
    }

    #[test]
    fn test_premium_taxonomy_is_configurable() {
        let badges = decode("premium/1").unwrap();
        assert!(badges.contains(&Badge::Premium));

        let folded = Badges::decode("premium/1", &ParserConfig::default().with_premium_badge(false))
            .unwrap();
        assert!(folded.contains(&Badge::Unhandled("premium".to_string())));
    }

    #[test]
    fn test_malformed_badges_fail() {
        assert_eq!(
            decode("moderator"),
            Err(FieldError::MalformedBadge("moderator".to_string()))
        );
        assert!(matches!(decode("moderator/1/2"), Err(FieldError::MalformedBadge(_))));
        assert!(matches!(decode("moderator/1,"), Err(FieldError::MalformedBadge(_))));
        assert_eq!(
            decode("moderator/one"),
            Err(FieldError::InvalidNumber("one".to_string()))
        );
        assert_eq!(
            decode("bits/100,bits/1000"),
            Err(FieldError::DuplicateBadge("bits".to_string()))
        );
    }

    #[test]
    fn test_privilege() {
        assert_eq!(decode("broadcaster/1,subscriber/0").unwrap().privilege(), Privilege::Broadcaster);
        assert_eq!(decode("moderator/1").unwrap().privilege(), Privilege::Moderator);
        assert_eq!(decode("staff/1,bits/1000").unwrap().privilege(), Privilege::Moderator);
        assert_eq!(decode("subscriber/6").unwrap().privilege(), Privilege::Subscriber);
        assert_eq!(decode("turbo/1").unwrap().privilege(), Privilege::Normal);
        assert!(Privilege::Broadcaster > Privilege::Normal);
    }

    #[test]
    fn test_user_type() {
        assert_eq!(UserType::from_wire(""), UserType::Empty);
        assert_eq!(UserType::from_wire("global_mod"), UserType::GlobalMod);
        assert_eq!(
            UserType::from_wire("partner"),
            UserType::Unhandled("partner".to_string())
        );
        assert_eq!(UserType::Staff.as_str(), "staff");
    }
}
