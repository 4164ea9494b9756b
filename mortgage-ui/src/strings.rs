//! Message text lookup.
//!
//! The core only hands out [`MessageKey`]s. A [`StringTable`] turns them into
//! display text, starting from the built-in English defaults and applying
//! any overrides from the configuration file.

use std::collections::HashMap;

use mortgage_core::MessageKey;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StringTableError {
    #[error("unknown message key '{0}'")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    overrides: HashMap<MessageKey, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `key = text` pairs, as found in the `[strings]`
    /// section of the config file.
    pub fn from_overrides<'a, I>(overrides: I) -> Result<Self, StringTableError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::new();
        for (name, text) in overrides {
            let key =
                MessageKey::parse(name).ok_or_else(|| StringTableError::UnknownKey(name.clone()))?;
            table.set(key, text.clone());
        }
        Ok(table)
    }

    pub fn set(
        &mut self,
        key: MessageKey,
        text: impl Into<String>,
    ) {
        self.overrides.insert(key, text.into());
    }

    pub fn get(
        &self,
        key: MessageKey,
    ) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }
}
