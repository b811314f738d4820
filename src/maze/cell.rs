use crossterm::style::{Color, Stylize};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
};

use std::fmt;

/// A single grid cell label.
///
/// On the wire cells use the game's mixed alphabet: `1` for a wall, `0` for an open
/// path, `"S"` for the start and `"G"` for the goal.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Path,
    Start,
    Goal,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Wall => serializer.serialize_u8(1),
            Cell::Path => serializer.serialize_u8(0),
            Cell::Start => serializer.serialize_str("S"),
            Cell::Goal => serializer.serialize_str("G"),
        }
    }
}

struct CellVisitor;

impl Visitor<'_> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"a maze cell token: 0, 1, "S" or "G""#)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Cell, E> {
        match v {
            0 => Ok(Cell::Path),
            1 => Ok(Cell::Wall),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Cell, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Cell, E> {
        match v {
            "S" => Ok(Cell::Start),
            "G" => Ok(Cell::Goal),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "⬜".with(Color::White),
            Cell::Path => "  ".with(Color::Reset),
            Cell::Start => "🟩".with(Color::Green),
            Cell::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_tokens() {
        let cells = [Cell::Wall, Cell::Path, Cell::Start, Cell::Goal];
        assert_eq!(serde_json::to_value(cells).unwrap(), json!([1, 0, "S", "G"]));

        let parsed: Vec<Cell> = serde_json::from_value(json!([0, "G", 1, "S"])).unwrap();
        assert_eq!(parsed, vec![Cell::Path, Cell::Goal, Cell::Wall, Cell::Start]);
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert!(serde_json::from_value::<Cell>(json!(2)).is_err());
        assert!(serde_json::from_value::<Cell>(json!(-1)).is_err());
        assert!(serde_json::from_value::<Cell>(json!("X")).is_err());
        assert!(serde_json::from_value::<Cell>(json!("s")).is_err());
        assert!(serde_json::from_value::<Cell>(json!(null)).is_err());
    }
}
