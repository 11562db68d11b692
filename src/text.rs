/// UTF-8 bytes of `input`.
pub fn encode(input: impl AsRef<str>) -> Vec<u8> {
    input.as_ref().as_bytes().to_vec()
}

/// Decodes UTF-8, replacing malformed sequences with U+FFFD.
pub fn decode(input: impl AsRef<[u8]>) -> String {
    String::from_utf8_lossy(input.as_ref()).into_owned()
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode(""), Vec::<u8>::new());
        assert_eq!(super::encode("foo"), b"foo".to_vec());
        assert_eq!(super::encode("你好"), vec![0xe4, 0xbd, 0xa0, 0xe5, 0xa5, 0xbd]);
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode([0xe4, 0xbd, 0xa0, 0xe5, 0xa5, 0xbd]), "你好");
        assert_eq!(super::decode(b"foo\xffbar"), "foo\u{fffd}bar");
        assert_eq!(super::decode([0xe4, 0xbd]), "\u{fffd}");
    }
}
