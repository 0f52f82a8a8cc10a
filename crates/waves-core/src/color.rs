//! `rgb(...)` / `rgba(...)` colour strings as used by the wave configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Colour substituted for any configuration string that fails to parse.
pub const FALLBACK_COLOR: Rgba = Rgba::new(255, 255, 255, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected an rgb( or rgba( prefix")]
    MissingPrefix,
    #[error("missing closing parenthesis")]
    Unterminated,
    #[error("expected 3 or 4 components, found {0}")]
    ComponentCount(usize),
    #[error("invalid channel value `{0}`")]
    Channel(String),
    #[error("invalid alpha value `{0}`")]
    Alpha(String),
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Add `delta` to every colour channel, saturating at 0 and 255. Alpha is kept.
    pub fn shifted(&self, delta: i16) -> Self {
        let shift = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b), self.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .ok_or(ColorParseError::MissingPrefix)?;
        let body = body.strip_suffix(')').ok_or(ColorParseError::Unterminated)?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(ColorParseError::ComponentCount(parts.len()));
        }

        let channel = |p: &str| -> Result<u8, ColorParseError> {
            if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ColorParseError::Channel(p.to_owned()));
            }
            p.parse::<u8>()
                .map_err(|_| ColorParseError::Channel(p.to_owned()))
        };

        let a = match parts.get(3) {
            Some(p) => {
                let valid_chars = !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit() || b == b'.');
                match p.parse::<f64>() {
                    Ok(a) if valid_chars && (0.0..=1.0).contains(&a) => a,
                    _ => return Err(ColorParseError::Alpha((*p).to_owned())),
                }
            }
            None => 1.0,
        };

        Ok(Self::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            a,
        ))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Parse a configuration colour, substituting [`FALLBACK_COLOR`] when the string is malformed.
pub fn parse_color(s: &str) -> Rgba {
    s.parse().unwrap_or_else(|e| {
        log::debug!("color `{}` rejected ({}); using fallback", s, e);
        FALLBACK_COLOR
    })
}
