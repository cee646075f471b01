// src/coco_runtime/src/tag.rs

/// A boolean as it arrives from generated code: an `i64` that should be
/// 0 or 1 but is not guaranteed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolTag {
    False,
    True,
    /// Any tag other than 0 or 1. Printed as the plain integer.
    Other(i64),
}

impl BoolTag {
    pub fn from_raw(raw: i64) -> BoolTag {
        match raw {
            0 => BoolTag::False,
            1 => BoolTag::True,
            other => BoolTag::Other(other),
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            BoolTag::False => 0,
            BoolTag::True => 1,
            BoolTag::Other(v) => v,
        }
    }

    /// `None` for out-of-range tags.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            BoolTag::False => Some(false),
            BoolTag::True => Some(true),
            BoolTag::Other(_) => None,
        }
    }
}

impl From<bool> for BoolTag {
    fn from(value: bool) -> Self {
        if value {
            BoolTag::True
        } else {
            BoolTag::False
        }
    }
}
