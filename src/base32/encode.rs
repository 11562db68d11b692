use super::{Alphabet, ALPHABET};
pub use crate::base_binary::encode::Error;

pub struct Encoder<'a> {
    encoder: crate::base_binary::Encoder<'a, 32>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>) -> Self {
        Self {
            encoder: crate::base_binary::Encoder::new(alphabet, 5),
        }
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        self.encoder.encoded_len(len)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(input, output)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(input)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}
