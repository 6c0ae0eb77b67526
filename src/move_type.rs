//! The closed set of move types and the color each one is drawn with.

use crate::Vocabulary;

use egui::Color32;
use std::fmt;

/// Background used for type cells whose text is not one of the 18 known types.
pub const UNLISTED_TYPE_COLOR: Color32 = Color32::from_rgb(0x9a, 0x9a, 0x9a);

/// The elemental type of a move.
///
/// Variant order is the order shown in the type dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl MoveType {
    /// Background color of the type cell.
    pub const fn color(self) -> Color32 {
        match self {
            MoveType::Normal => Color32::from_rgb(0x8a, 0x8a, 0x59),
            MoveType::Fire => Color32::from_rgb(0xf0, 0x80, 0x30),
            MoveType::Water => Color32::from_rgb(0x68, 0x90, 0xf0),
            MoveType::Electric => Color32::from_rgb(0xf8, 0xd0, 0x30),
            MoveType::Grass => Color32::from_rgb(0x78, 0xc8, 0x50),
            MoveType::Ice => Color32::from_rgb(0x98, 0xd8, 0xd8),
            MoveType::Fighting => Color32::from_rgb(0xc0, 0x30, 0x28),
            MoveType::Poison => Color32::from_rgb(0xa0, 0x40, 0xa0),
            MoveType::Ground => Color32::from_rgb(0xe0, 0xc0, 0x68),
            MoveType::Flying => Color32::from_rgb(0xa8, 0x90, 0xf0),
            MoveType::Psychic => Color32::from_rgb(0xf8, 0x58, 0x88),
            MoveType::Bug => Color32::from_rgb(0xa8, 0xb8, 0x20),
            MoveType::Rock => Color32::from_rgb(0xb8, 0xa0, 0x38),
            MoveType::Ghost => Color32::from_rgb(0x70, 0x58, 0x98),
            MoveType::Dragon => Color32::from_rgb(0x70, 0x38, 0xf8),
            MoveType::Dark => Color32::from_rgb(0x70, 0x58, 0x48),
            MoveType::Steel => Color32::from_rgb(0xb8, 0xb8, 0xd0),
            MoveType::Fairy => Color32::from_rgb(0xe8, 0x98, 0xe8),
        }
    }

    /// The color as a `#rrggbb` string.
    pub fn hex(self) -> String {
        let color = self.color();
        format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
    }
}

impl Vocabulary for MoveType {
    const ALL: &'static [Self] = &[
        MoveType::Normal,
        MoveType::Fire,
        MoveType::Water,
        MoveType::Electric,
        MoveType::Grass,
        MoveType::Ice,
        MoveType::Fighting,
        MoveType::Poison,
        MoveType::Ground,
        MoveType::Flying,
        MoveType::Psychic,
        MoveType::Bug,
        MoveType::Rock,
        MoveType::Ghost,
        MoveType::Dragon,
        MoveType::Dark,
        MoveType::Steel,
        MoveType::Fairy,
    ];

    fn label(self) -> &'static str {
        match self {
            MoveType::Normal => "Normal",
            MoveType::Fire => "Fire",
            MoveType::Water => "Water",
            MoveType::Electric => "Electric",
            MoveType::Grass => "Grass",
            MoveType::Ice => "Ice",
            MoveType::Fighting => "Fighting",
            MoveType::Poison => "Poison",
            MoveType::Ground => "Ground",
            MoveType::Flying => "Flying",
            MoveType::Psychic => "Psychic",
            MoveType::Bug => "Bug",
            MoveType::Rock => "Rock",
            MoveType::Ghost => "Ghost",
            MoveType::Dragon => "Dragon",
            MoveType::Dark => "Dark",
            MoveType::Steel => "Steel",
            MoveType::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
