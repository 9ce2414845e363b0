use crate::error::JukeboxError;
use crate::model::EXIT_ID;
use std::str::FromStr;

/// What the user typed at the prompt, once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// Any other integer. May or may not be in the catalog.
    Number(i64),
    /// An integer too large for any catalog id, kept as normalized digits
    /// (`-` sign if negative, no leading zeros) so it can be echoed back.
    Unlisted(String),
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Exit => write!(f, "{}", EXIT_ID),
            Selection::Number(n) => write!(f, "{}", n),
            Selection::Unlisted(digits) => write!(f, "{}", digits),
        }
    }
}

impl FromStr for Selection {
    type Err = JukeboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JukeboxError::MalformedSelection(s.to_string()));
        }

        match text.parse::<i64>() {
            Ok(EXIT_ID) => Ok(Selection::Exit),
            Ok(n) => Ok(Selection::Number(n)),
            Err(_) => {
                let magnitude = digits.trim_start_matches('0');
                let sign = if negative { "-" } else { "" };
                Ok(Selection::Unlisted(format!("{}{}", sign, magnitude)))
            }
        }
    }
}
