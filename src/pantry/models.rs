use serde::{Deserialize, Serialize};

/// Items scanned at the checkout: one row per position across the columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannedBatch {
    pub upcs: Vec<i64>,
    pub expiries: Vec<String>,
    pub counts: Vec<i32>,
}

/// Items typed in by hand; these never carry a barcode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManualBatch {
    pub names: Vec<String>,
    pub expiries: Vec<String>,
    pub counts: Vec<i32>,
}

/// Rewrites of existing items, matched by `item_ids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdateBatch {
    pub item_ids: Vec<i32>,
    pub upcs: Vec<i64>,
    pub expiries: Vec<String>,
    pub counts: Vec<i32>,
}

impl ScannedBatch {
    pub(crate) fn column_lengths(&self) -> Vec<usize> {
        vec![self.upcs.len(), self.expiries.len(), self.counts.len()]
    }
}

impl ManualBatch {
    pub(crate) fn column_lengths(&self) -> Vec<usize> {
        vec![self.names.len(), self.expiries.len(), self.counts.len()]
    }
}

impl ItemUpdateBatch {
    pub(crate) fn column_lengths(&self) -> Vec<usize> {
        vec![
            self.item_ids.len(),
            self.upcs.len(),
            self.expiries.len(),
            self.counts.len(),
        ]
    }
}
