//! Element types stored in the containers under test.
//!
//! Every element carries a `usize` key in its first field. Policies locate,
//! order, and mutate elements through that key only, so the padding that
//! makes an element "large" never takes part in comparisons.
//!
//! ## Element Families
//!
//! | Type                     | Size (bytes) | `Copy` | Notes                              |
//! |--------------------------|--------------|--------|------------------------------------|
//! | [`TrivialSmall`]         | 8            | yes    | key only                           |
//! | [`TrivialMedium`]        | 32           | yes    | key + 24 bytes padding             |
//! | [`TrivialLarge`]         | 128          | yes    | key + 120 bytes padding            |
//! | [`TrivialHuge`]          | 1024         | yes    | key + 1016 bytes padding           |
//! | [`TrivialMonster`]       | 4096         | yes    | key + 4088 bytes padding           |
//! | [`NonTrivialString`]     | 32           | no     | owns a heap string (costly clone)  |
//! | [`NonTrivialArrayMedium`]| 32           | no     | `Clone` only, bitwise-large moves  |
//!
//! ## Example
//!
//! ```
//! use seqbench::element::{Element, TrivialMedium};
//!
//! let value = TrivialMedium::from_key(7);
//! assert_eq!(value.key(), 7);
//! assert_eq!(std::mem::size_of::<TrivialMedium>(), 32);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A value that can be stored in a benchmarked container.
///
/// Ordering and equality are defined on [`key`](Element::key) alone.
pub trait Element: Clone + Default + Ord + fmt::Debug + 'static {
    /// Builds an element whose key is `key`.
    fn from_key(key: usize) -> Self;

    /// Returns the element's key.
    fn key(&self) -> usize;

    /// Returns a mutable reference to the element's key.
    fn key_mut(&mut self) -> &mut usize;
}

/// Returns a short, human readable name for an element type.
///
/// Module paths are stripped from the type name and its generic arguments,
/// so `seqbench::element::Trivial<24>` becomes `Trivial<24>`.
pub fn type_label<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut label = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        match ch {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '[' | ']' | ';' | '(' | ')' | '&' => {
                label.push_str(&segment);
                segment.clear();
                label.push(ch);
            },
            _ => segment.push(ch),
        }
    }
    label.push_str(&segment);
    label
}

// ---------------------------------------------------------------------------
// Trivial
// ---------------------------------------------------------------------------

/// Plain-old-data element: a key followed by `PAD` bytes of padding.
#[derive(Clone, Copy)]
pub struct Trivial<const PAD: usize> {
    pub a: usize,
    pub pad: [u8; PAD],
}

impl<const PAD: usize> Default for Trivial<PAD> {
    fn default() -> Self {
        Self { a: 0, pad: [0; PAD] }
    }
}

impl<const PAD: usize> fmt::Debug for Trivial<PAD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trivial")
            .field("a", &self.a)
            .field("pad", &PAD)
            .finish()
    }
}

impl<const PAD: usize> PartialEq for Trivial<PAD> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
    }
}

impl<const PAD: usize> Eq for Trivial<PAD> {}

impl<const PAD: usize> PartialOrd for Trivial<PAD> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const PAD: usize> Ord for Trivial<PAD> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a.cmp(&other.a)
    }
}

impl<const PAD: usize> Element for Trivial<PAD> {
    #[inline]
    fn from_key(key: usize) -> Self {
        Self { a: key, pad: [0; PAD] }
    }

    #[inline]
    fn key(&self) -> usize {
        self.a
    }

    #[inline]
    fn key_mut(&mut self) -> &mut usize {
        &mut self.a
    }
}

pub type TrivialSmall = Trivial<0>;
pub type TrivialMedium = Trivial<24>;
pub type TrivialLarge = Trivial<120>;
pub type TrivialHuge = Trivial<1016>;
pub type TrivialMonster = Trivial<4088>;

const _: () = assert!(size_of::<TrivialSmall>() == 8);
const _: () = assert!(size_of::<TrivialMedium>() == 32);
const _: () = assert!(size_of::<TrivialLarge>() == 128);
const _: () = assert!(size_of::<TrivialHuge>() == 1024);
const _: () = assert!(size_of::<TrivialMonster>() == 4096);

// ---------------------------------------------------------------------------
// NonTrivialString
// ---------------------------------------------------------------------------

const LONG_TEXT: &str = "some pretty long string to make sure it is not stored inline";

/// Element owning a heap-allocated string: cheap to move, costly to clone.
#[derive(Clone)]
pub struct NonTrivialString {
    pub a: usize,
    data: String,
}

impl NonTrivialString {
    /// Returns the owned payload.
    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Default for NonTrivialString {
    fn default() -> Self {
        Self::from_key(0)
    }
}

impl fmt::Debug for NonTrivialString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonTrivialString")
            .field("a", &self.a)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NonTrivialString {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
    }
}

impl Eq for NonTrivialString {}

impl PartialOrd for NonTrivialString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NonTrivialString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a.cmp(&other.a)
    }
}

impl Element for NonTrivialString {
    fn from_key(key: usize) -> Self {
        Self {
            a: key,
            data: LONG_TEXT.to_owned(),
        }
    }

    #[inline]
    fn key(&self) -> usize {
        self.a
    }

    #[inline]
    fn key_mut(&mut self) -> &mut usize {
        &mut self.a
    }
}

// ---------------------------------------------------------------------------
// NonTrivialArray
// ---------------------------------------------------------------------------

/// Inline array element that is `Clone` but deliberately not `Copy`.
#[derive(Clone)]
pub struct NonTrivialArray<const PAD: usize> {
    pub a: usize,
    b: [u8; PAD],
}

impl<const PAD: usize> Default for NonTrivialArray<PAD> {
    fn default() -> Self {
        Self::from_key(0)
    }
}

impl<const PAD: usize> fmt::Debug for NonTrivialArray<PAD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonTrivialArray")
            .field("a", &self.a)
            .field("b", &PAD)
            .finish()
    }
}

impl<const PAD: usize> PartialEq for NonTrivialArray<PAD> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
    }
}

impl<const PAD: usize> Eq for NonTrivialArray<PAD> {}

impl<const PAD: usize> PartialOrd for NonTrivialArray<PAD> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const PAD: usize> Ord for NonTrivialArray<PAD> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a.cmp(&other.a)
    }
}

impl<const PAD: usize> Element for NonTrivialArray<PAD> {
    #[inline]
    fn from_key(key: usize) -> Self {
        Self { a: key, b: [0; PAD] }
    }

    #[inline]
    fn key(&self) -> usize {
        self.a
    }

    #[inline]
    fn key_mut(&mut self) -> &mut usize {
        &mut self.a
    }
}

pub type NonTrivialArrayMedium = NonTrivialArray<24>;

const _: () = assert!(size_of::<NonTrivialArrayMedium>() == 32);
