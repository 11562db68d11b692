use super::{Alphabet, ALPHABET};
pub use crate::base_binary::decode::Error;

pub struct Decoder<'a> {
    decoder: crate::base_binary::Decoder<'a, 32>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>) -> Self {
        Self {
            decoder: crate::base_binary::Decoder::new(alphabet, 5),
        }
    }

    pub fn decoded_len(&self, len: usize) -> usize {
        self.decoder.decoded_len(len)
    }

    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        self.decoder.decode(input)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}
