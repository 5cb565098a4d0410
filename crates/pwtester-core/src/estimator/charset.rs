/// Ordered character sets for brute-force estimation.
///
/// Order matters: a character's index is its digit value when the password
/// is read as a base-N number.
use crate::error::CharsetError;
use std::collections::HashMap;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// The 32 printable ASCII punctuation characters, in code-point order.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// An ordered set of distinct characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
    index: HashMap<char, usize>,
}

impl Charset {
    /// Build a charset, rejecting repeated characters.
    pub fn new<I>(chars: I) -> Result<Self, CharsetError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut set = Self {
            chars: Vec::new(),
            index: HashMap::new(),
        };
        for ch in chars {
            if !set.push(ch) {
                return Err(CharsetError::Duplicate(ch));
            }
        }
        Ok(set)
    }

    /// Union of the preset classes the password draws from, in the order
    /// lower, upper, digits, symbols. Characters outside every class are
    /// appended in first-seen order, so estimating `password` against the
    /// returned charset never fails.
    pub fn for_password(password: &str) -> Self {
        let mut set = Self {
            chars: Vec::new(),
            index: HashMap::new(),
        };
        for class in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
            if password.chars().any(|c| class.contains(c)) {
                for c in class.chars() {
                    set.push(c);
                }
            }
        }
        for c in password.chars() {
            set.push(c);
        }
        set
    }

    /// Appends `ch` unless already present. Returns whether it was added.
    fn push(&mut self, ch: char) -> bool {
        if self.index.contains_key(&ch) {
            return false;
        }
        self.index.insert(ch, self.chars.len());
        self.chars.push(ch);
        true
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.index.get(&ch).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl std::str::FromStr for Charset {
    type Err = CharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_expected_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.parse::<Charset>().is_ok());
    }

    #[test]
    fn duplicate_is_rejected() {
        assert_eq!("abca".parse::<Charset>(), Err(CharsetError::Duplicate('a')));
    }

    #[test]
    fn index_follows_insertion_order() {
        let cs: Charset = "xyz".parse().unwrap();
        assert_eq!(cs.index_of('x'), Some(0));
        assert_eq!(cs.index_of('z'), Some(2));
        assert_eq!(cs.index_of('a'), None);
    }

    #[test]
    fn for_password_picks_classes() {
        assert_eq!(Charset::for_password("abc").len(), 26);
        assert_eq!(Charset::for_password("abc1").len(), 36);
        assert_eq!(Charset::for_password("aB3!").len(), 94);
        assert!(Charset::for_password("").is_empty());
    }

    #[test]
    fn for_password_appends_unclassified_chars() {
        let cs = Charset::for_password("a b");
        assert_eq!(cs.len(), 27);
        assert_eq!(cs.index_of(' '), Some(26));

        let cs = Charset::for_password("ßß");
        assert_eq!(cs.chars(), &['ß']);
    }
}
