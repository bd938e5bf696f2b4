//! Alphabet letters and letter-keyed collections
//!
//! The game buckets answers by their first letter. Every letter A-Z always has
//! an entry, so letter-keyed data is stored in fixed 26-slot arrays rather than
//! open-ended maps.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::normalize;

/// One of the 26 alphabet letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Every letter in alphabetical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Position in the alphabet (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Letter at a given alphabet position
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Letter for an uppercase ASCII character
    ///
    /// Only `'A'..='Z'` map to a letter. Callers wanting case and accent
    /// insensitivity should go through [`Letter::from_input`].
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Self::from_index((ch as u8 - b'A') as usize)
        } else {
            None
        }
    }

    /// Letter targeted by a normalized string
    ///
    /// The string must be exactly one uppercase ASCII letter.
    #[must_use]
    pub fn from_normalized(normalized: &str) -> Option<Self> {
        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => None,
        }
    }

    /// Letter targeted by the first character of raw user input
    ///
    /// The character is normalized first, so `é` targets `E`. Characters
    /// that do not normalize to a single A-Z letter (digits, `ß`, a leading
    /// combining mark) target nothing.
    ///
    /// # Examples
    /// ```
    /// use abc_daily::core::Letter;
    ///
    /// assert_eq!(Letter::from_input("éclair"), Some(Letter::E));
    /// assert_eq!(Letter::from_input("42nd street"), None);
    /// assert_eq!(Letter::from_input(""), None);
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let first = input.chars().next()?;
        Self::from_normalized(&normalize(first.encode_utf8(&mut [0; 4])))
    }

    /// Uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_normalized(&normalize(s.trim())).ok_or_else(|| format!("Invalid letter: {s}"))
    }
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter
    pub const FULL: Self = Self((1 << Letter::COUNT) - 1);

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Add a letter, returning whether it was newly inserted
    pub const fn insert(&mut self, letter: Letter) -> bool {
        let was_present = self.contains(letter);
        self.0 |= 1 << letter.index();
        !was_present
    }

    /// Remove a letter, returning whether it was present
    pub const fn remove(&mut self, letter: Letter) -> bool {
        let was_present = self.contains(letter);
        self.0 &= !(1 << letter.index());
        was_present
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::ALL.into_iter().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for LetterSet {
    type Err = String;

    /// Parse a list like `"ABZ"` or `"a, b, z"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.encode_utf8(&mut [0; 4]).parse::<Letter>())
            .collect()
    }
}

/// One value per alphabet letter
///
/// Serialized as a JSON object keyed by `"A"` through `"Z"`. Missing keys
/// deserialize to `T::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMap<T>([T; Letter::COUNT]);

impl<T> LetterMap<T> {
    /// Build a map by computing each letter's value
    pub fn from_fn(mut f: impl FnMut(Letter) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Letter::ALL[i])))
    }

    #[inline]
    #[must_use]
    pub fn get(&self, letter: Letter) -> &T {
        &self.0[letter.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, letter: Letter) -> &mut T {
        &mut self.0[letter.index()]
    }

    /// Entries in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, &T)> {
        Letter::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Default> Default for LetterMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Letter> for LetterMap<T> {
    type Output = T;

    fn index(&self, letter: Letter) -> &T {
        self.get(letter)
    }
}

impl<T> IndexMut<Letter> for LetterMap<T> {
    fn index_mut(&mut self, letter: Letter) -> &mut T {
        self.get_mut(letter)
    }
}

impl<T: Default> FromIterator<(Letter, T)> for LetterMap<T> {
    fn from_iter<I: IntoIterator<Item = (Letter, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (letter, value) in iter {
            map[letter] = value;
        }
        map
    }
}

impl<T: Serialize> Serialize for LetterMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Letter::COUNT))?;
        for (letter, value) in self.iter() {
            map.serialize_entry(&letter, value)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for LetterMap<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LetterMapVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for LetterMapVisitor<T>
        where
            T: Deserialize<'de> + Default,
        {
            type Value = LetterMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by letters A-Z")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut map = LetterMap::default();
                let mut seen = LetterSet::new();
                while let Some(letter) = access.next_key::<Letter>()? {
                    if !seen.insert(letter) {
                        return Err(de::Error::custom(format!("duplicate letter {letter}")));
                    }
                    map[letter] = access.next_value()?;
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LetterMapVisitor(PhantomData))
    }
}
