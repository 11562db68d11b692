use crate::{error::Error, locale::Locale};
use std::{env, error, str::ParseBoolError};

#[derive(Debug, Clone)]
pub struct Configuration {
    locale: Locale,
    verbose: bool,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| Error::new(format!("Invalid {} {}", key, value))),
        Err(err) => default.ok_or(err),
    }
}

fn parse_flag(value: &str) -> Result<bool, ParseBoolError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "on" => Ok(true),
        "0" | "no" | "off" | "" => Ok(false),
        other => other.parse(),
    }
}

impl Configuration {
    /// Reads `LOCALE` and `VERBOSE` from the environment.
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let locale = var_map(&lookup, "LOCALE", |locale| locale.parse(), Some(Locale::default()))?;
        let verbose = var_map(&lookup, "VERBOSE", parse_flag, Some(false))?;
        Ok(Self { locale, verbose })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use crate::locale::Locale;
    use std::collections::HashMap;

    fn configuration(vars: &[(&str, &str)]) -> Result<Configuration, String> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(|key| vars.get(key).cloned()).map_err(|error| error.to_string())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert_eq!(configuration.locale(), Locale::ZhHant);
        assert!(!configuration.verbose());
    }

    #[test]
    fn overrides() {
        let configuration = configuration(&[("LOCALE", "en-US"), ("VERBOSE", "yes")]).unwrap();
        assert_eq!(configuration.locale(), Locale::En);
        assert!(configuration.verbose());
        assert!(super::Configuration::from_lookup(|key| (key == "VERBOSE").then(|| "TRUE".to_string()))
            .unwrap()
            .verbose());
    }

    #[test]
    fn invalid() {
        assert_eq!(configuration(&[("LOCALE", "fr")]).err(), Some("Invalid LOCALE fr".to_string()));
        assert_eq!(configuration(&[("VERBOSE", "maybe")]).err(), Some("Invalid VERBOSE maybe".to_string()));
    }
}
