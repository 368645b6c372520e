//! External raw timestamp representation.

use serde::{Deserialize, Serialize};

/// Raw 64-bit timestamp: 100ns ticks since 1601, unsigned.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct FileTime {
    pub value: u64,
}

/// Platform two-word timestamp layout (low word first).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(C)]
pub struct FileTimeWords {
    pub low: u32,
    pub high: u32,
}

impl FileTime {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    #[inline]
    pub const fn from_words(words: FileTimeWords) -> Self {
        Self::new(words.low as u64 | ((words.high as u64) << 32))
    }

    #[inline]
    pub const fn to_words(self) -> FileTimeWords {
        FileTimeWords {
            low: (self.value & 0xFFFF_FFFF) as u32,
            high: (self.value >> 32) as u32,
        }
    }
}

impl From<u64> for FileTime {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<FileTime> for u64 {
    fn from(time: FileTime) -> Self {
        time.value
    }
}

impl From<FileTimeWords> for FileTime {
    fn from(words: FileTimeWords) -> Self {
        Self::from_words(words)
    }
}

impl From<FileTime> for FileTimeWords {
    fn from(time: FileTime) -> Self {
        time.to_words()
    }
}
