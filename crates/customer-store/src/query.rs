/// Criteria container for multi-record retrieval.
///
/// No filter criteria are defined yet: a default query matches every
/// record in the store. The container exists so the retrieval signature
/// stays stable once field-match criteria are introduced.
#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {}

impl CustomerQuery {
    /// Creates a query matching every record.
    pub fn all() -> Self {
        Self::default()
    }
}
