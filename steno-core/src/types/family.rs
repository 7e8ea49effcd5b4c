//! Steno key families and their place in the chord mask

use std::fmt;

/// Number of key families
pub const FAMILY_COUNT: usize = 5;

/// A partition of steno key slots
///
/// The discriminant is the family tag stored in packed keymap cells. Tag 0
/// is reserved for "unknown".
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    CaseControl = 1,
    LeftHand = 2,
    Thumbs = 3,
    RightHand = 4,
    Spaces = 5,
}

/// Static description of one family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyDescriptor {
    pub family: Family,
    /// First bit of the family inside the 32-bit chord mask
    pub bit_offset: u32,
    /// Number of slots
    pub width: u32,
    /// Whether the family owns an encoding table
    pub has_table: bool,
}

/// Families in the order the stroke resolver walks them
pub const STROKE_ORDER: [FamilyDescriptor; FAMILY_COUNT] = [
    FamilyDescriptor { family: Family::CaseControl, bit_offset: 27, width: 2, has_table: false },
    FamilyDescriptor { family: Family::LeftHand, bit_offset: 0, width: 8, has_table: true },
    FamilyDescriptor { family: Family::Thumbs, bit_offset: 8, width: 4, has_table: true },
    FamilyDescriptor { family: Family::RightHand, bit_offset: 12, width: 8, has_table: true },
    FamilyDescriptor { family: Family::Spaces, bit_offset: 20, width: 4, has_table: true },
];

impl Family {
    pub const ALL: [Family; FAMILY_COUNT] = [
        Family::CaseControl,
        Family::LeftHand,
        Family::Thumbs,
        Family::RightHand,
        Family::Spaces,
    ];

    /// Families that own an encoding table, in stroke order
    pub const WITH_TABLES: [Family; 4] = [
        Family::LeftHand,
        Family::Thumbs,
        Family::RightHand,
        Family::Spaces,
    ];

    /// Dense index in `0..FAMILY_COUNT`
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Family::CaseControl),
            2 => Some(Family::LeftHand),
            3 => Some(Family::Thumbs),
            4 => Some(Family::RightHand),
            5 => Some(Family::Spaces),
            _ => None,
        }
    }

    pub const fn descriptor(self) -> FamilyDescriptor {
        STROKE_ORDER[self.index()]
    }

    pub const fn bit_offset(self) -> u32 {
        self.descriptor().bit_offset
    }

    pub const fn width(self) -> u32 {
        self.descriptor().width
    }

    pub const fn has_table(self) -> bool {
        self.descriptor().has_table
    }

    /// Mask of valid slot bits inside the family byte
    pub const fn slot_mask(self) -> u8 {
        ((1u16 << self.width()) - 1) as u8
    }

    /// The family's bits inside the 32-bit chord mask
    pub const fn chord_mask(self) -> u32 {
        (self.slot_mask() as u32) << self.bit_offset()
    }

    /// Number of distinct slot combinations
    pub const fn combinations(self) -> usize {
        1 << self.width()
    }

    /// Keyword used by the text chord format
    pub const fn keyword(self) -> &'static str {
        match self {
            Family::CaseControl => "case",
            Family::LeftHand => "left",
            Family::Thumbs => "thumbs",
            Family::RightHand => "right",
            Family::Spaces => "spaces",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Family::ALL.into_iter().find(|f| f.keyword() == word)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
