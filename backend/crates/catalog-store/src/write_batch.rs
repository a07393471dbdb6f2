use catalog_core::Fields;

/// A merge-update of one document. Fields set to `null` are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchUpdate {
    pub collection: String,
    pub id: String,
    pub fields: Fields,
}

/// Updates committed together. Either every update lands or none do; an
/// update aimed at a missing document fails the whole batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WriteBatch {
    updates: Vec<BatchUpdate>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        collection: impl Into<String>,
        id: impl Into<String>,
        fields: Fields,
    ) -> &mut Self {
        self.updates.push(BatchUpdate {
            collection: collection.into(),
            id: id.into(),
            fields,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn updates(&self) -> &[BatchUpdate] {
        &self.updates
    }

    pub fn into_updates(self) -> Vec<BatchUpdate> {
        self.updates
    }
}
