mod tokenize;
mod tokens;

pub use tokenize::normalize;
pub use tokens::{Token, TokenKind, WeightUnit};
