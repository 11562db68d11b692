use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Alphabet has {actual} characters, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter { character: char, first: usize, second: usize },
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("Invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Symbol table mapping `N` ascii characters to the values `0..N` and back.
pub struct Alphabet<const N: usize> {
    characters: &'static str,
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &'static str) -> Result<Self, Error> {
        let bytes = characters.as_bytes();
        if bytes.len() != N {
            return Err(Error::InvalidLength {
                expected: N,
                actual: bytes.len(),
            });
        }

        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = bytes[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self {
            characters,
            encode,
            decode,
        })
    }

    /// Character for `value`, which must be below `N`.
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        self.value(character).ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub fn value(&self, character: char) -> Option<u8> {
        if character.is_ascii() {
            self.decode[character as usize]
        } else {
            None
        }
    }

    pub fn contains(&self, character: char) -> bool {
        self.value(character).is_some()
    }

    pub const fn as_str(&self) -> &'static str {
        self.characters
    }

    pub const fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    #[test]
    fn new() {
        assert!(Alphabet::<4>::new("abcd").is_ok());
        assert_eq!(
            Alphabet::<4>::new("abc").err(),
            Some(Error::InvalidLength { expected: 4, actual: 3 })
        );
        assert_eq!(
            Alphabet::<4>::new("abca").err(),
            Some(Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
        // 'é' is two bytes, the first of which is reported
        assert_eq!(
            Alphabet::<4>::new("abé").err(),
            Some(Error::NonAsciiCharacter { character: 0xc3, index: 2 })
        );
    }

    #[test]
    fn lookup() {
        let alphabet = match Alphabet::<4>::new("wxyz") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.encode(2), b'y');
        assert_eq!(alphabet.decode('z', 0), Ok(3));
        assert_eq!(alphabet.decode('a', 5), Err(DecodeError::InvalidCharacter { character: 'a', index: 5 }));
        assert_eq!(alphabet.value('好'), None);
        assert!(alphabet.contains('w'));
        assert!(!alphabet.contains('W'));
        assert_eq!(alphabet.as_str(), "wxyz");
        assert_eq!(alphabet.len(), 4);
    }
}
