use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Unsupported locale \"{0}\"")]
pub struct Error(String);

/// Working language of user-facing messages.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-Hant")]
    ZhHant,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::ZhHant => "zh-Hant",
            Self::En => "en",
        }
    }

    pub const fn empty_input(&self) -> &'static str {
        match self {
            Self::ZhHant => "請輸入需要解密的 Base32 密文",
            Self::En => "Please enter the Base32 ciphertext to decrypt",
        }
    }

    pub fn invalid_character(&self, character: char, alphabet: &str) -> String {
        match self {
            Self::ZhHant => format!("密文包含無效字符 '{}'。只允許使用以下字符: {}", character, alphabet),
            Self::En => format!(
                "Ciphertext contains invalid character '{}'. Only the following characters are allowed: {}",
                character, alphabet
            ),
        }
    }

    pub fn invalid_ciphertext_character(&self, character: char) -> String {
        match self {
            Self::ZhHant => format!("密文中包含無效的Base32字符: {}", character),
            Self::En => format!("Ciphertext contains an invalid Base32 character: {}", character),
        }
    }

    pub const fn odd_hex_length(&self) -> &'static str {
        match self {
            Self::ZhHant => "十六進制字串的長度必須是偶數。",
            Self::En => "The hexadecimal string must have an even length.",
        }
    }

    pub const fn invalid_hex_character(&self) -> &'static str {
        match self {
            Self::ZhHant => "十六進制字串包含無效字符。",
            Self::En => "The hexadecimal string contains invalid characters.",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-hant" | "zh-tw" | "zh-hk" | "zh" => Ok(Self::ZhHant),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            _ => Err(Error(tag.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
