use crate::Vocabulary;

use std::fmt;

/// The damage class of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
    ZMove,
}

impl Vocabulary for MoveCategory {
    const ALL: &'static [Self] = &[
        MoveCategory::Physical,
        MoveCategory::Special,
        MoveCategory::Status,
        MoveCategory::ZMove,
    ];

    fn label(self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
            MoveCategory::ZMove => "Z-Move",
        }
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
