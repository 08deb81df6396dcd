use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Prefix has {length} digits, at most {max} fit a 16-digit card number")]
    InvalidPrefixLength { length: usize, max: usize },

    #[error("Prefix contains non-digit character '{0}'")]
    InvalidPrefixDigit(char),
}
