use serde::{Deserialize, Serialize};

/// Weight unit vocabulary recognized in spoken commands.
///
/// Units are recorded as spoken and never converted; the parsed weight value
/// stays unit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }

    /// Classify a lower-cased token as a weight unit.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "kg" | "kilogram" | "kilograms" | "kilos" => Some(Self::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(Self::Lb),
            _ => None,
        }
    }
}

/// Classification of a single transcript token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Free text, a candidate exercise-name fragment.
    Word,
    /// A digit token. Always finite and non-negative.
    Number(f64),
    /// A weight unit word (`kg`, `pounds`, ...).
    Unit(WeightUnit),
    /// A rep-count suffix word (`rep`, `reps`, `repetitions`).
    RepsMarker,
}

/// A normalized transcript token.
///
/// `raw` keeps the original casing (minus stripped punctuation) so the parser
/// can reconstruct exercise names as they were spoken; classification happens
/// on the lower-cased form.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub raw: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word)
    }
}
