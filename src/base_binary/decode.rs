use super::Alphabet;
use crate::base_common::alphabet;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Output buffer too small")]
    BufferTooSmall,
    #[error("Invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

/// Unpacks `bits`-wide symbols back into bytes. Trailing bits that do not fill a byte are dropped unchecked.
pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self { alphabet, bits }
    }

    pub fn decoded_len(&self, len: usize) -> usize {
        (len * self.bits) / 8
    }

    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut output_index = 0;
        for (input_index, character) in input.as_ref().chars().enumerate() {
            let value = self.alphabet.decode(character, input_index)?;
            accumulator = (accumulator << self.bits) | (value as usize);
            bits += self.bits;
            while bits >= 8 {
                bits -= 8;
                *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = ((accumulator >> bits) & 0xFF) as u8;
                output_index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        // byte length bounds the character count
        let mut output = vec![0u8; self.decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error};
    use crate::base_common::Alphabet;

    const OCTAL: Alphabet<8> = match Alphabet::new("01234567") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

    #[test]
    fn decode() {
        let decoder = Decoder::new(&OCTAL, 3);
        assert_eq!(decoder.decode(""), Ok(vec![]));
        assert_eq!(decoder.decode("776"), Ok(vec![0xff]));
        assert_eq!(decoder.decode("002010"), Ok(vec![0x01, 0x02]));
        // the trailing bit of '7' is not checked
        assert_eq!(decoder.decode("777"), Ok(vec![0xff]));
        assert_eq!(decoder.decode("77"), Ok(vec![]));
    }

    #[test]
    fn decode_errors() {
        let decoder = Decoder::new(&OCTAL, 3);
        assert_eq!(decoder.decode("0180"), Err(Error::InvalidCharacter { character: '8', index: 2 }));
        assert_eq!(decoder.decode("0é9"), Err(Error::InvalidCharacter { character: 'é', index: 1 }));
        assert_eq!(decoder.decode_into("776776", &mut [0u8; 1]), Err(Error::BufferTooSmall));
    }
}
