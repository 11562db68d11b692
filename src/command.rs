use crate::{
    base32::{self, DecodeError, Validator},
    error::Error,
    hex,
    locale::Locale,
    logger::Logger,
    text,
};
use serde_json::{json, Value};
use std::{fmt, str::FromStr};

macro_rules! unwrap {
    ( $x:expr ) => {{
        match $x {
            Ok(result) => result,
            Err(error) => return respond_error(error),
        }
    }};
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Encode,
    EncodeHex,
    Decode,
    DecodeHex,
    Validate,
}

impl Command {
    pub const ALL: [Command; 5] = [Self::Encode, Self::EncodeHex, Self::Decode, Self::DecodeHex, Self::Validate];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::EncodeHex => "encode-hex",
            Self::Decode => "decode",
            Self::DecodeHex => "decode-hex",
            Self::Validate => "validate",
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| Error::new(format!(r#"Unknown command "{}""#, name)))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    success: bool,
    body: Value,
}

impl Response {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

fn respond_ok(value: Value) -> Response {
    Response {
        success: true,
        body: json!({ "result": value }),
    }
}

fn respond_error(error: Error) -> Response {
    Response {
        success: false,
        body: json!({ "message": error.message() }),
    }
}

fn decode_error(error: DecodeError, locale: Locale) -> Error {
    match error {
        DecodeError::InvalidCharacter { character, .. } => Error::new(locale.invalid_ciphertext_character(character)),
        DecodeError::BufferTooSmall => Error::new(error.to_string()),
    }
}

fn hex_error(error: hex::Error, locale: Locale) -> Error {
    match error {
        hex::Error::OddLength => Error::new(locale.odd_hex_length()),
        hex::Error::InvalidHexCharacter { .. } => Error::new(locale.invalid_hex_character()),
        hex::Error::BufferTooSmall => Error::new(error.to_string()),
    }
}

fn decode(input: &str, validator: &Validator) -> Result<Vec<u8>, Error> {
    if let Some(diagnostic) = validator.check(input) {
        return Err(Error::new(validator.message(&diagnostic)));
    }
    base32::decode(input).map_err(|error| decode_error(error, validator.locale()))
}

fn validate(input: &str, validator: &Validator) -> Response {
    match validator.check(input) {
        Some(diagnostic) => Response {
            success: true,
            body: json!({
                "valid": false,
                "diagnostic": diagnostic,
                "message": validator.message(&diagnostic),
            }),
        },
        None => Response {
            success: true,
            body: json!({ "valid": true }),
        },
    }
}

fn describe(response: &Response) -> &'static str {
    match (response.success, response.body.get("valid")) {
        (true, Some(Value::Bool(false))) => "rejected",
        (true, _) => "succeeded",
        (false, _) => "failed",
    }
}

/// Runs `command` on `input`, rendering failures in the validator's locale.
pub fn run(command: Command, input: &str, validator: &Validator, logger: &Logger) -> Response {
    logger.log(format!("{} {} characters", command, input.chars().count()));
    let response = execute(command, input, validator);
    logger.log(format!("{} {}", command, describe(&response)));
    response
}

fn execute(command: Command, input: &str, validator: &Validator) -> Response {
    let locale = validator.locale();
    match command {
        Command::Encode => respond_ok(json!(base32::encode(text::encode(input)))),
        Command::EncodeHex => {
            let bytes = unwrap!(hex::decode(input).map_err(|error| hex_error(error, locale)));
            respond_ok(json!(base32::encode(bytes)))
        }
        Command::Decode => {
            let bytes = unwrap!(decode(input, validator));
            respond_ok(json!(text::decode(bytes)))
        }
        Command::DecodeHex => {
            let bytes = unwrap!(decode(input, validator));
            respond_ok(json!(hex::encode(bytes)))
        }
        Command::Validate => validate(input, validator),
    }
}
