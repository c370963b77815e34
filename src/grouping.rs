use std::collections::BTreeMap;

use crate::types::{Group, GroupKey, Record};

/// Collapse records sharing a trimmed (name, link) key.
/// Groups come back sorted by key; records keep input order within a group.
pub fn group_records(records: impl IntoIterator<Item = Record>) -> Vec<Group> {
    let mut groups: BTreeMap<GroupKey, Group> = BTreeMap::new();

    for record in records {
        let key = record.group_key();
        match groups.get_mut(&key) {
            Some(group) => group.push(record),
            None => {
                groups.insert(key.clone(), Group::new(key, record));
            }
        }
    }

    groups.into_values().collect()
}
