use html::Id;

#[derive(Debug, thiserror::Error)]
pub enum TypographyError {
    #[error("no node with id {0:?} in the document")]
    RootNotFound(Id),
    #[error("unsupported root selector {0:?} (expected `*`, `tag`, `#id` or `.class`)")]
    InvalidSelector(String),
    #[error("invalid replacement pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("invalid typography config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
