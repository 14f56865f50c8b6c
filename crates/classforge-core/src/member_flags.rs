//! Modifier flags for fields and methods.

use bitflags::bitflags;

bitflags! {
    /// Modifier keywords parsed off the front of a member fragment.
    ///
    /// The registry itself never interprets these; they are carried through
    /// to the materializer, which may give them meaning (or ignore them).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MemberFlags: u8 {
        /// `public`
        const PUBLIC = 1;
        /// `private`
        const PRIVATE = 1 << 1;
        /// `static`
        const STATIC = 1 << 2;
        /// `final`
        const FINAL = 1 << 3;
    }
}

impl MemberFlags {
    /// Map a modifier keyword to its flag, if it is one.
    pub fn from_keyword(word: &str) -> Option<MemberFlags> {
        match word {
            "public" => Some(MemberFlags::PUBLIC),
            "private" => Some(MemberFlags::PRIVATE),
            "static" => Some(MemberFlags::STATIC),
            "final" => Some(MemberFlags::FINAL),
            _ => None,
        }
    }
}
