/// Errors from parsing or validating foundation types.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The string does not name a managed page.
    #[error("unknown page id: {0}")]
    UnknownPage(String),
}
