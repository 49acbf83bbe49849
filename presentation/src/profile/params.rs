//! Profile page request parameters
//!
//! Only `showallcohorts` matters here. It is read as an optional integer the
//! way the host reads integer parameters: an absent value is `0`, leading
//! digits are kept, anything unparseable becomes `0`.

use thiserror::Error;

pub const SHOW_ALL_PARAM: &str = "showallcohorts";

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Malformed query string: {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),
}

/// Parameters of one profile page request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileParams {
    pub show_all_cohorts: i64,
}

impl ProfileParams {
    /// Parses a URL query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Result<Self, ParamsError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

        let show_all_cohorts = pairs
            .iter()
            .rev()
            .find(|(key, _)| key == SHOW_ALL_PARAM)
            .map_or(0, |(_, value)| param_int(value));

        Ok(Self { show_all_cohorts })
    }

    pub fn with_show_all(show_all: bool) -> Self {
        Self {
            show_all_cohorts: i64::from(show_all),
        }
    }

    /// Any non-zero value asks for the full list.
    pub fn show_all(&self) -> bool {
        self.show_all_cohorts != 0
    }
}

/// Integer cleaning: optional sign and leading digits, otherwise `0`.
fn param_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first().copied() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}
