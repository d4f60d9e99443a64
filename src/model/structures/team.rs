use std::fmt;

use serde::{Deserialize, Serialize};

/// An unordered pair of two distinct players.
///
/// Construction sorts the names, so equal pairs compare and hash equal no
/// matter which order they were supplied in. That canonical form is what the
/// enumerator relies on to never emit the same pairing twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Team {
    players: [String; 2],
}

impl Team {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Team {
        let (a, b) = (a.into(), b.into());
        debug_assert_ne!(a, b, "a team requires two distinct players");

        if b < a {
            Team { players: [b, a] }
        } else {
            Team { players: [a, b] }
        }
    }

    pub fn players(&self) -> &[String; 2] {
        &self.players
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.players.iter().map(String::as_str)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.players[0], self.players[1])
    }
}

#[cfg(test)]
mod tests {
    use super::Team;

    #[test]
    fn test_order_is_canonical() {
        assert_eq!(Team::new("Luca", "Harald"), Team::new("Harald", "Luca"));
    }

    #[test]
    fn test_contains() {
        let team = Team::new("Miruna", "Angela");

        assert!(team.contains("Angela"));
        assert!(team.contains("Miruna"));
        assert!(!team.contains("Slava"));
    }

    #[test]
    fn test_display_uses_canonical_order() {
        assert_eq!(Team::new("Slava", "Alexey").to_string(), "Alexey & Slava");
    }
}
