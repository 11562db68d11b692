pub mod base32;
pub mod base_binary;
pub mod base_common;
pub mod chronometer;
pub mod command;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod locale;
pub mod logger;
pub mod text;

use self::{
    base32::Validator,
    command::Command,
    configuration::Configuration,
    error::Error,
    logger::Logger,
};
use std::{env, io, process};

const USAGE: &str = "\
Usage: base32-cipher <command> [input]

Commands:
  encode      Encode UTF-8 text
  encode-hex  Encode the bytes of a hex string
  decode      Decode to UTF-8 text
  decode-hex  Decode to a hex string
  validate    Check that the input can be decoded

Input is read from stdin when omitted.

Environment:
  LOCALE   Language of messages, zh-Hant (default) or en
  VERBOSE  Log progress to stderr when true";

fn read_input(argument: Option<String>) -> Result<String, Error> {
    if let Some(input) = argument {
        return Ok(input);
    }
    let mut input = io::read_to_string(io::stdin())?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn run() -> Result<i32, Error> {
    let configuration = Configuration::new()?;
    let logger = Logger::new(configuration.verbose());

    let mut arguments = env::args().skip(1);
    let command = match arguments.next().map(|name| name.parse::<Command>()) {
        Some(Ok(command)) => command,
        Some(Err(error)) => {
            eprintln!("{}\n\n{}", error, USAGE);
            return Ok(2);
        }
        None => {
            eprintln!("{}", USAGE);
            return Ok(2);
        }
    };
    let input = read_input(arguments.next())?;
    if arguments.next().is_some() {
        eprintln!("{}", USAGE);
        return Ok(2);
    }

    let validator = Validator::new(&base32::ALPHABET, configuration.locale());
    logger.log(format!("Locale {}", validator.locale()));
    let response = command::run(command, &input, &validator, &logger);
    println!("{}", response.body());
    Ok(if response.success() { 0 } else { 1 })
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            2
        }
    };
    process::exit(code);
}
