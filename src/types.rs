//! Purchase records and the groups they collapse into

use std::collections::BTreeMap;

pub const GAME_NAME: &str = "Game Name";
pub const GAME_PAGE_LINK: &str = "Game Page Link";
pub const THUMBNAIL: &str = "Thumbnail";
pub const DESCRIPTION: &str = "Description";
pub const AUTHOR: &str = "Author";
pub const CATEGORY: &str = "Category";
pub const GENRE: &str = "Genre";
pub const TAGS: &str = "Tags";
pub const PRICE: &str = "Price";

/// One CSV row, keyed by header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Value of a column, or "" when the column is absent
    pub fn field(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            name: self.field(GAME_NAME).trim().to_string(),
            link: self.field(GAME_PAGE_LINK).trim().to_string(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

/// Trimmed (name, link) pair. Field order gives the sort order: name, then link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub name: String,
    pub link: String,
}

/// All records sharing a key, in input order
#[derive(Debug, Clone)]
pub struct Group {
    pub key: GroupKey,
    records: Vec<Record>,
}

impl Group {
    pub fn new(key: GroupKey, first: Record) -> Self {
        Self {
            key,
            records: vec![first],
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// First record seen for this key; supplies every rendered field
    pub fn representative(&self) -> &Record {
        &self.records[0]
    }
}
