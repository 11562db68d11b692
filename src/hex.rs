use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Output buffer too small")]
    BufferTooSmall,
    #[error("Invalid character {character:?} at position {index}")]
    InvalidHexCharacter { character: char, index: usize },
    #[error("Odd number of digits")]
    OddLength,
}

const fn value(character: char, index: usize) -> Result<u8, Error> {
    match character {
        'A'..='F' => Ok(character as u8 - b'A' + 10),
        'a'..='f' => Ok(character as u8 - b'a' + 10),
        '0'..='9' => Ok(character as u8 - b'0'),
        _ => Err(Error::InvalidHexCharacter { character, index }),
    }
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let mut output = vec![0u8; input.len() / 2];
    let len = decode_into(input, &mut output)?;
    output.truncate(len);
    Ok(output)
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let characters: Vec<char> = input.as_ref().chars().collect();
    let output = output.as_mut();
    if characters.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    let len = characters.len() / 2;
    if output.len() < len {
        return Err(Error::BufferTooSmall);
    }
    for (i, pair) in characters.chunks(2).enumerate() {
        output[i] = value(pair[0], 2 * i)? << 4 | value(pair[1], 2 * i + 1)?;
    }
    Ok(len)
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode(b""), "");
        assert_eq!(super::encode(b"Hello world"), "48656c6c6f20776f726c64");
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(
            super::decode("48656c6c6f20776f726c64"),
            Ok(vec![0x48, 0x65, 0x6c, 0x6c, 0x6f, 0x20, 0x77, 0x6f, 0x72, 0x6c, 0x64])
        );
        assert_eq!(super::decode("DeadBEEF"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
    }

    #[test]
    fn decode_errors() {
        assert_eq!(super::decode("abc"), Err(Error::OddLength));
        assert_eq!(super::decode("0g"), Err(Error::InvalidHexCharacter { character: 'g', index: 1 }));
        assert_eq!(super::decode("0x12"), Err(Error::InvalidHexCharacter { character: 'x', index: 1 }));
        // two characters, six bytes
        assert_eq!(super::decode("好a"), Err(Error::InvalidHexCharacter { character: '好', index: 0 }));
        assert_eq!(super::decode("好"), Err(Error::OddLength));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 11];
        let len = super::decode_into("48656c6c6f20776f726c64", &mut output);
        assert_eq!(len, Ok(11));
        assert_eq!(&output, b"Hello world");
        assert_eq!(super::decode_into("abcd", &mut [0u8; 1]), Err(Error::BufferTooSmall));
    }
}
