use serde::Serialize;

/// Summary of a full count rebuild. `errors` holds one `"<id>: <message>"`
/// entry per category whose recomputation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RebuildReport {
    pub updated: usize,
    pub errors: Vec<String>,
}
