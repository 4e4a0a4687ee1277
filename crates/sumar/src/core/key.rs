//! Key identities and keystroke classification
//!
//! Every keypad key carries a stable identity string and a display value
//! (the glyph printed on the key). The presentation layers hand raw
//! identity/value pairs to [`classify`], which either produces a typed
//! [`Key`] or reports why the event is malformed. Malformed events are
//! defensive territory: callers log them and leave the calculator state
//! untouched.

use thiserror::Error;

use super::token::Operator;

/// Identity strings for the ten digit keys, indexed by digit
const DIGIT_IDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Display values for the ten digit keys, indexed by digit
const DIGIT_VALUES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A classified keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key (0-9)
    Digit(u8),
    /// An operator key
    Operator(Operator),
    /// The decimal-point key
    Decimal,
    /// The equals key
    Equals,
    /// The clear key
    Clear,
}

impl Key {
    /// Returns the key's stable identity string
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_IDS.get(usize::from(*d)).copied().unwrap_or("zero"),
            Self::Operator(Operator::Add) => "add",
            Self::Operator(Operator::Subtract) => "subtract",
            Self::Operator(Operator::Multiply) => "multiply",
            Self::Operator(Operator::Divide) => "divide",
            Self::Decimal => "decimal",
            Self::Equals => "equals",
            Self::Clear => "clear",
        }
    }

    /// Returns the glyph printed on the key
    #[must_use]
    pub fn value(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_VALUES.get(usize::from(*d)).copied().unwrap_or("0"),
            Self::Operator(Operator::Add) => "+",
            Self::Operator(Operator::Subtract) => "-",
            Self::Operator(Operator::Multiply) => "*",
            Self::Operator(Operator::Divide) => "/",
            Self::Decimal => ".",
            Self::Equals => "=",
            Self::Clear => "AC",
        }
    }

    /// Looks a key up by its identity string
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        if let Some(digit) = DIGIT_IDS.iter().position(|known| *known == id) {
            return Some(Self::Digit(digit as u8));
        }
        match id {
            "add" => Some(Self::Operator(Operator::Add)),
            "subtract" => Some(Self::Operator(Operator::Subtract)),
            "multiply" => Some(Self::Operator(Operator::Multiply)),
            "divide" => Some(Self::Operator(Operator::Divide)),
            "decimal" => Some(Self::Decimal),
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            _ => None,
        }
    }

    /// All seventeen keys, in keypad order
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut keys = vec![
            Self::Clear,
            Self::Operator(Operator::Divide),
            Self::Operator(Operator::Multiply),
        ];
        for d in 1..=3 {
            keys.push(Self::Digit(d));
        }
        keys.push(Self::Operator(Operator::Add));
        for d in 4..=6 {
            keys.push(Self::Digit(d));
        }
        keys.push(Self::Operator(Operator::Subtract));
        for d in 7..=9 {
            keys.push(Self::Digit(d));
        }
        keys.push(Self::Equals);
        keys.push(Self::Digit(0));
        keys.push(Self::Decimal);
        keys
    }
}

/// A raw keystroke as delivered by a presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKey {
    /// The key's identity string (may be empty on malformed events)
    pub id: String,
    /// The key's display value (may be empty on malformed events)
    pub value: String,
}

impl RawKey {
    /// Creates a raw keystroke from an identity and value pair
    #[must_use]
    pub fn new(id: &str, value: &str) -> Self {
        Self {
            id: id.to_string(),
            value: value.to_string(),
        }
    }
}

/// Why a raw keystroke could not be classified
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyEventError {
    /// The event carried no identity at all
    #[error("key event carries no identity")]
    MissingId,
    /// The identity is not one of the seventeen known keys
    #[error("unrecognized key identity '{0}'")]
    UnknownId(String),
    /// The key exists but its value is empty
    #[error("key '{0}' carries an empty value")]
    EmptyValue(String),
}

/// Classifies a raw keystroke into a typed key
///
/// Rejects events with a missing or unrecognized identity or an empty
/// value. Callers log the error and drop the event; classification never
/// mutates calculator state.
pub fn classify(raw: &RawKey) -> Result<Key, KeyEventError> {
    if raw.id.is_empty() {
        return Err(KeyEventError::MissingId);
    }
    let key = Key::from_id(&raw.id).ok_or_else(|| KeyEventError::UnknownId(raw.id.clone()))?;
    if raw.value.is_empty() {
        return Err(KeyEventError::EmptyValue(raw.id.clone()));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Identity tests =====

    #[test]
    fn test_digit_ids() {
        assert_eq!(Key::Digit(0).id(), "zero");
        assert_eq!(Key::Digit(5).id(), "five");
        assert_eq!(Key::Digit(9).id(), "nine");
    }

    #[test]
    fn test_operator_ids() {
        assert_eq!(Key::Operator(Operator::Add).id(), "add");
        assert_eq!(Key::Operator(Operator::Subtract).id(), "subtract");
        assert_eq!(Key::Operator(Operator::Multiply).id(), "multiply");
        assert_eq!(Key::Operator(Operator::Divide).id(), "divide");
    }

    #[test]
    fn test_special_ids() {
        assert_eq!(Key::Decimal.id(), "decimal");
        assert_eq!(Key::Equals.id(), "equals");
        assert_eq!(Key::Clear.id(), "clear");
    }

    #[test]
    fn test_values() {
        assert_eq!(Key::Digit(7).value(), "7");
        assert_eq!(Key::Operator(Operator::Divide).value(), "/");
        assert_eq!(Key::Decimal.value(), ".");
        assert_eq!(Key::Equals.value(), "=");
        assert_eq!(Key::Clear.value(), "AC");
    }

    #[test]
    fn test_from_id_roundtrip() {
        for key in Key::all() {
            assert_eq!(Key::from_id(key.id()), Some(key));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Key::from_id("percent"), None);
        assert_eq!(Key::from_id(""), None);
        assert_eq!(Key::from_id("Zero"), None);
    }

    #[test]
    fn test_all_seventeen_keys() {
        let keys = Key::all();
        assert_eq!(keys.len(), 17);
        let ids: std::collections::HashSet<&str> = keys.iter().map(Key::id).collect();
        assert_eq!(ids.len(), 17);
    }

    // ===== Classification tests =====

    #[test]
    fn test_classify_digit() {
        let raw = RawKey::new("seven", "7");
        assert_eq!(classify(&raw), Ok(Key::Digit(7)));
    }

    #[test]
    fn test_classify_operator() {
        let raw = RawKey::new("multiply", "*");
        assert_eq!(classify(&raw), Ok(Key::Operator(Operator::Multiply)));
    }

    #[test]
    fn test_classify_clear() {
        let raw = RawKey::new("clear", "AC");
        assert_eq!(classify(&raw), Ok(Key::Clear));
    }

    #[test]
    fn test_classify_missing_id() {
        let raw = RawKey::new("", "7");
        assert_eq!(classify(&raw), Err(KeyEventError::MissingId));
    }

    #[test]
    fn test_classify_unknown_id() {
        let raw = RawKey::new("modulo", "%");
        assert_eq!(classify(&raw), Err(KeyEventError::UnknownId("modulo".into())));
    }

    #[test]
    fn test_classify_empty_value() {
        let raw = RawKey::new("equals", "");
        assert_eq!(classify(&raw), Err(KeyEventError::EmptyValue("equals".into())));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            KeyEventError::MissingId.to_string(),
            "key event carries no identity"
        );
        assert_eq!(
            KeyEventError::UnknownId("foo".into()).to_string(),
            "unrecognized key identity 'foo'"
        );
        assert_eq!(
            KeyEventError::EmptyValue("clear".into()).to_string(),
            "key 'clear' carries an empty value"
        );
    }
}
