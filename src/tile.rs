use serde::{Deserialize, Serialize};

/// Tile tag stored in every grid cell.
/// Integer codes: 0=floor, 1=wall, 2=start, 3=goal, 4=key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CellTag {
    Floor,
    Wall,
    Start,
    Goal,
    Key,
}

impl CellTag {
    /// Integer code used by level files
    pub fn code(self) -> i32 {
        match self {
            CellTag::Floor => 0,
            CellTag::Wall => 1,
            CellTag::Start => 2,
            CellTag::Goal => 3,
            CellTag::Key => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<CellTag> {
        match code {
            0 => Some(CellTag::Floor),
            1 => Some(CellTag::Wall),
            2 => Some(CellTag::Start),
            3 => Some(CellTag::Goal),
            4 => Some(CellTag::Key),
            _ => None,
        }
    }

    /// Single character used by the text renderer
    pub fn glyph(self) -> char {
        match self {
            CellTag::Floor => '.',
            CellTag::Wall => '#',
            CellTag::Start => 'S',
            CellTag::Goal => 'G',
            CellTag::Key => 'K',
        }
    }

    pub fn is_walkable(self) -> bool {
        self != CellTag::Wall
    }
}

impl TryFrom<i32> for CellTag {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        CellTag::from_code(code).ok_or_else(|| format!("Unknown tile code: {}", code))
    }
}

impl From<CellTag> for i32 {
    fn from(tag: CellTag) -> i32 {
        tag.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_level_format() {
        assert_eq!(CellTag::Floor.code(), 0);
        assert_eq!(CellTag::Wall.code(), 1);
        assert_eq!(CellTag::Start.code(), 2);
        assert_eq!(CellTag::Goal.code(), 3);
        assert_eq!(CellTag::Key.code(), 4);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(CellTag::from_code(5), None);
        assert_eq!(CellTag::from_code(-1), None);
        assert!(CellTag::try_from(7).is_err());
    }

    #[test]
    fn test_serde_uses_integer_codes() {
        let json = serde_json::to_string(&vec![CellTag::Wall, CellTag::Key]).unwrap();
        assert_eq!(json, "[1,4]");

        let tags: Vec<CellTag> = serde_json::from_str("[0,2,3]").unwrap();
        assert_eq!(tags, vec![CellTag::Floor, CellTag::Start, CellTag::Goal]);

        assert!(serde_json::from_str::<Vec<CellTag>>("[9]").is_err());
    }

    #[test]
    fn test_only_wall_blocks() {
        assert!(!CellTag::Wall.is_walkable());
        assert!(CellTag::Floor.is_walkable());
        assert!(CellTag::Key.is_walkable());
        assert!(CellTag::Goal.is_walkable());
    }
}
