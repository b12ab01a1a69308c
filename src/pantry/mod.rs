mod models;

use std::{collections::BTreeMap, ffi::OsString, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::ProductCatalog;
use crate::grocery::{GroceryItem, MANUAL_UPC};

pub use models::{ItemUpdateBatch, ManualBatch, ScannedBatch};

/// Per-user grocery inventories.
///
/// Item ids come from a single counter shared by every user, so an id is
/// never handed out twice within one pantry (or any snapshot of it).
/// Once the `i32` id space is used up, adds fail with
/// [`PantryError::IdsExhausted`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Pantry {
    // Wider than the ids so the counter can sit one past `i32::MAX`.
    next_item_id: i64,
    users: BTreeMap<u32, Vec<GroceryItem>>,
}

impl Default for Pantry {
    fn default() -> Self {
        Self {
            next_item_id: 1,
            users: BTreeMap::new(),
        }
    }
}

/// All columns of a batch must have the same number of rows.
fn ensure_same_length(lengths: Vec<usize>) -> Result<(), PantryError> {
    if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(PantryError::LengthMismatch { lengths });
    }
    Ok(())
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a user's items in insertion order.
    pub fn items(&self, uid: u32) -> Result<&[GroceryItem], PantryError> {
        self.users
            .get(&uid)
            .map(|v| v.as_slice())
            .ok_or(PantryError::UnknownUser(uid))
    }

    /// User ids with a pantry, ascending.
    pub fn users(&self) -> impl Iterator<Item = u32> + '_ {
        self.users.keys().copied()
    }

    /// Total number of items across every user.
    pub fn len(&self) -> usize {
        self.users.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand out `count` consecutive ids, or none at all.
    fn reserve_ids(&mut self, count: usize) -> Result<Vec<i32>, PantryError> {
        let exhausted = || PantryError::IdsExhausted { requested: count };
        let first = self.next_item_id;
        let end = i64::try_from(count)
            .ok()
            .and_then(|count| first.checked_add(count))
            .filter(|end| *end <= i64::from(i32::MAX) + 1)
            .ok_or_else(exhausted)?;

        let ids = (first..end)
            .map(|id| i32::try_from(id).map_err(|_| exhausted()))
            .collect::<Result<Vec<_>, _>>()?;
        self.next_item_id = end;
        Ok(ids)
    }

    /// Store scanned items, naming each from `catalog`.
    ///
    /// A UPC the catalog does not know is named by its own digits.
    pub fn add_scanned(
        &mut self,
        uid: u32,
        batch: ScannedBatch,
        catalog: &ProductCatalog,
    ) -> Result<Vec<i32>, PantryError> {
        ensure_same_length(batch.column_lengths())?;

        let mut rows = Vec::with_capacity(batch.upcs.len());
        for ((upc, expiry), count) in batch.upcs.into_iter().zip(batch.expiries).zip(batch.counts) {
            let name = match catalog.name_for(upc) {
                Some(name) => name.to_string(),
                None => {
                    warn!(upc, "UPC not in catalog, using barcode as name");
                    upc.to_string()
                }
            };
            rows.push((name, expiry, count, upc));
        }

        let ids = self.store(uid, rows)?;
        info!(uid, added = ids.len(), "added scanned items");
        Ok(ids)
    }

    /// Store hand-entered items; they get [`MANUAL_UPC`].
    pub fn add_manual(&mut self, uid: u32, batch: ManualBatch) -> Result<Vec<i32>, PantryError> {
        ensure_same_length(batch.column_lengths())?;

        let rows = batch
            .names
            .into_iter()
            .zip(batch.expiries)
            .zip(batch.counts)
            .map(|((name, expiry), count)| (name, expiry, count, MANUAL_UPC))
            .collect();

        let ids = self.store(uid, rows)?;
        info!(uid, added = ids.len(), "added manual items");
        Ok(ids)
    }

    fn store(
        &mut self,
        uid: u32,
        rows: Vec<(String, String, i32, i64)>,
    ) -> Result<Vec<i32>, PantryError> {
        let ids = self.reserve_ids(rows.len())?;
        let items = rows
            .into_iter()
            .zip(&ids)
            .map(|((name, expiry, count, upc), id)| GroceryItem::new(name, expiry, count, *id, upc));
        self.users.entry(uid).or_default().extend(items);
        Ok(ids)
    }

    /// Remove the listed items from a user's pantry.
    ///
    /// Returns how many were removed; unknown users and ids remove nothing.
    pub fn delete(&mut self, uid: u32, item_ids: &[i32]) -> usize {
        let Some(items) = self.users.get_mut(&uid) else {
            debug!(uid, "delete for user without pantry");
            return 0;
        };

        let before = items.len();
        items.retain(|item| !item_ids.contains(&item.item_id()));
        let removed = before - items.len();

        if removed == 0 {
            debug!(uid, ?item_ids, "no items matched delete");
        } else {
            info!(uid, removed, "deleted items");
        }
        removed
    }

    /// Overwrite UPC, expiry and count of existing items.
    ///
    /// Rows whose id the user does not own are skipped. Returns the number
    /// of rows applied.
    pub fn update(&mut self, uid: u32, batch: ItemUpdateBatch) -> Result<usize, PantryError> {
        ensure_same_length(batch.column_lengths())?;
        let items = self.users.get_mut(&uid).ok_or(PantryError::UnknownUser(uid))?;

        let rows = batch
            .item_ids
            .into_iter()
            .zip(batch.upcs)
            .zip(batch.expiries)
            .zip(batch.counts);

        let mut updated = 0;
        for (((item_id, upc), expiry), count) in rows {
            match items.iter_mut().find(|item| item.item_id() == item_id) {
                Some(item) => {
                    item.set_upc(upc);
                    item.set_expiry(expiry);
                    item.set_quantity(count);
                    updated += 1;
                }
                None => debug!(uid, item_id, "update skipped unknown item"),
            }
        }

        info!(uid, updated, "updated items");
        Ok(updated)
    }

    /// Drop a user's pantry; returns how many items it held.
    pub fn remove_user(&mut self, uid: u32) -> usize {
        let removed = self.users.remove(&uid).map(|v| v.len()).unwrap_or(0);
        info!(uid, removed, "removed user pantry");
        removed
    }

    // ---- Snapshots ----

    pub fn to_json(&self) -> Result<String, PantryError> {
        serde_json::to_string_pretty(self).map_err(PantryError::Json)
    }

    pub fn from_json(json: &str) -> Result<Self, PantryError> {
        let mut pantry: Pantry = serde_json::from_str(json).map_err(PantryError::Json)?;

        // Hand-edited snapshots may carry ids past the stored counter.
        let highest = pantry
            .users
            .values()
            .flatten()
            .map(GroceryItem::item_id)
            .max()
            .map_or(0, i64::from);
        if pantry.next_item_id <= highest {
            warn!(
                next_item_id = pantry.next_item_id,
                highest, "snapshot counter behind stored ids, advancing"
            );
            pantry.next_item_id = highest + 1;
        }
        Ok(pantry)
    }

    /// Read a snapshot; a file that does not exist yet is an empty pantry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PantryError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no snapshot yet, starting empty");
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)?;
        let pantry = Self::from_json(&data)?;
        debug!(path = %path.display(), items = pantry.len(), "snapshot loaded");
        Ok(pantry)
    }

    /// Write a snapshot: write to a tmp file then rename over `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PantryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut tmp_name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("pantry"));
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, self.to_json()?)?;
        if let Err(err) = fs::rename(&tmp, path) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "could not remove tmp snapshot");
            }
            return Err(err.into());
        }

        debug!(path = %path.display(), items = self.len(), "snapshot saved");
        Ok(())
    }
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum PantryError {
    #[error("no pantry for user {0}")]
    UnknownUser(u32),
    #[error("batch columns must have the same length, got {lengths:?}")]
    LengthMismatch { lengths: Vec<usize> },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("item ids exhausted, cannot allocate {requested} more")]
    IdsExhausted { requested: usize },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
