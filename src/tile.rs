/// The level-string tile grammar the core parser accepts.
///
/// Tokenizing a full level file is a host concern; this enum only names the
/// per-character alphabet `Problem::parse` feeds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Player,
    Crate,
    Goal,
    CrateOnGoal,
    PlayerOnGoal,
}

impl Tile {
    /// Parses one character of a level string, returning `None` for any
    /// character outside the grammar (the caller should skip it without
    /// advancing to the next cell).
    #[must_use]
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '.' => Some(Tile::Empty),
            'W' | 'w' => Some(Tile::Wall),
            'A' | 'a' => Some(Tile::Player),
            '1' => Some(Tile::Crate),
            '0' => Some(Tile::Goal),
            'g' | 'G' => Some(Tile::CrateOnGoal),
            '+' => Some(Tile::PlayerOnGoal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_alphabet_entry() {
        assert_eq!(Tile::from_char('.'), Some(Tile::Empty));
        assert_eq!(Tile::from_char('w'), Some(Tile::Wall));
        assert_eq!(Tile::from_char('W'), Some(Tile::Wall));
        assert_eq!(Tile::from_char('a'), Some(Tile::Player));
        assert_eq!(Tile::from_char('1'), Some(Tile::Crate));
        assert_eq!(Tile::from_char('0'), Some(Tile::Goal));
        assert_eq!(Tile::from_char('g'), Some(Tile::CrateOnGoal));
        assert_eq!(Tile::from_char('+'), Some(Tile::PlayerOnGoal));
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(Tile::from_char('\n'), None);
        assert_eq!(Tile::from_char('?'), None);
    }
}
