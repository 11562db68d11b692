use super::Alphabet;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Output buffer too small")]
    BufferTooSmall,
}

/// Packs bytes into `bits`-wide symbols, most significant bit first, without padding.
pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self { alphabet, bits }
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        (len * 8).div_ceil(self.bits)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mask = (1 << self.bits) - 1;
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut index = 0;
        for &value in input.as_ref() {
            accumulator = (accumulator << 8) | (value as usize);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode((accumulator >> bits) & mask);
                index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        if bits > 0 {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode((accumulator << (self.bits - bits)) & mask);
            index += 1;
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = vec![0u8; self.encoded_len(input.len())];
        match self.encode_into(input, &mut output) {
            Ok(len) => output.truncate(len),
            Err(Error::BufferTooSmall) => unreachable!("output is sized by encoded_len"),
        }
        output.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Encoder, Error};
    use crate::base_common::Alphabet;

    const OCTAL: Alphabet<8> = match Alphabet::new("01234567") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

    #[test]
    fn encode() {
        let encoder = Encoder::new(&OCTAL, 3);
        assert_eq!(encoder.encode([]), "");
        // 11111111 -> 111 111 11(0)
        assert_eq!(encoder.encode([0xff]), "776");
        // 00000001 00000010 -> 000 000 010 000 001 0(00)
        assert_eq!(encoder.encode([0x01, 0x02]), "002010");
        assert_eq!(encoder.encode_into([0xff], &mut [0u8; 2]), Err(Error::BufferTooSmall));
    }

    #[test]
    fn encoded_len() {
        let encoder = Encoder::new(&OCTAL, 3);
        assert_eq!(encoder.encoded_len(0), 0);
        assert_eq!(encoder.encoded_len(1), 3);
        assert_eq!(encoder.encoded_len(3), 8);
    }
}
