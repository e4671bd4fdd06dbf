use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Flag set describing an entry, as reported by an adapter.
///
/// The bit values follow the common Windows file attribute layout so adapters backed by such
/// systems can pass their raw value through. The facade only ever looks at [`DIRECTORY`].
///
/// [`DIRECTORY`]: AttributeSet::DIRECTORY
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeSet(u32);

impl AttributeSet {
    pub const READ_ONLY: AttributeSet = AttributeSet(0x01);
    pub const HIDDEN: AttributeSet = AttributeSet(0x02);
    pub const SYSTEM: AttributeSet = AttributeSet(0x04);
    pub const DIRECTORY: AttributeSet = AttributeSet(0x10);
    pub const ARCHIVE: AttributeSet = AttributeSet(0x20);
    pub const NORMAL: AttributeSet = AttributeSet(0x80);

    const NAMED: [(AttributeSet, &'static str); 6] = [
        (Self::READ_ONLY, "READ_ONLY"),
        (Self::HIDDEN, "HIDDEN"),
        (Self::SYSTEM, "SYSTEM"),
        (Self::DIRECTORY, "DIRECTORY"),
        (Self::ARCHIVE, "ARCHIVE"),
        (Self::NORMAL, "NORMAL"),
    ];

    pub const fn empty() -> Self {
        AttributeSet(0)
    }

    /// Wraps a raw value. Unknown bits are kept.
    pub const fn from_bits(bits: u32) -> Self {
        AttributeSet(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: AttributeSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_directory(self) -> bool {
        self.contains(Self::DIRECTORY)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AttributeSet {
    type Output = AttributeSet;

    fn bitor(self, rhs: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for AttributeSet {
    fn bitor_assign(&mut self, rhs: AttributeSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AttributeSet {
    type Output = AttributeSet;

    fn bitand(self, rhs: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 & rhs.0)
    }
}

impl fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining = self.0;
        let mut names = Vec::new();
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                names.push(name.to_string());
                remaining &= !flag.0;
            }
        }
        if remaining != 0 {
            names.push(format!("{:#x}", remaining));
        }
        if names.is_empty() {
            write!(f, "AttributeSet(empty)")
        } else {
            write!(f, "AttributeSet({})", names.join(" | "))
        }
    }
}
