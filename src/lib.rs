pub use record::{Record, RecordType};
use serde::Serialize;
use std::collections::{btree_map, BTreeMap};
pub use transcode::{transcode, HeaderIndex, RowLayout};

mod record;
mod transcode;

#[derive(thiserror::Error, Debug)]
pub enum HeaderError {
    #[error("Header has neither a `name` nor a `url` column to key entries by")]
    MissingKeyColumn,
    #[error("Header is missing the `{0}` column")]
    MissingColumn(&'static str),
}

#[derive(thiserror::Error, Debug)]
pub enum TranscodeError {
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Row at line {0} is too short, no `{1}` field")]
    MissingField(u64, &'static str),
}

/// The completed import document, keyed by display name
///
/// A `BTreeMap` keeps serialization order stable across runs. Inserting
/// under a display name that is already present replaces the earlier
/// entry; exports can legitimately carry several rows for one site and
/// the later row is taken as the current credential.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, Record>,
}

impl Catalog {
    /// Insert a record under `name`, last write wins
    pub fn insert(&mut self, name: String, record: Record) {
        if self.entries.contains_key(&name) {
            log::debug!("Duplicate entry `{}`, keeping the later row", name);
        }
        self.entries.insert(name, record);
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator across entries in serialization order
    pub fn iter_entries(&self) -> btree_map::Iter<'_, String, Record> {
        self.entries.iter()
    }
}

impl FromIterator<(String, Record)> for Catalog {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, Record)>,
    {
        let mut catalog = Catalog::default();
        for (name, record) in iter {
            catalog.insert(name, record);
        }
        catalog
    }
}
