//! Collapse duplicate tile ids into one canonical record.

use std::collections::HashMap;

use crate::tile::TileRecord;

/// Keep one record per id.
///
/// An `individual` record replaces any other kind reported for the same id;
/// between two `individual` records the first one wins. The output keeps the
/// position of each id's first appearance.
pub fn dedupe(records: Vec<TileRecord>) -> Vec<TileRecord> {
    let mut unique: Vec<TileRecord> = Vec::with_capacity(records.len());
    let mut position: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for record in records {
        match position.get(&record.id) {
            None => {
                position.insert(record.id.clone(), unique.len());
                unique.push(record);
            }
            Some(&at) => {
                if !unique[at].kind.is_individual() && record.kind.is_individual() {
                    unique[at] = record;
                }
            }
        }
    }

    unique
}
