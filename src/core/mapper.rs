use crate::core::{ReplacementMap, UuidSet, UuidSource};

/// One generated UUID per discovered UUID, in discovery order.
///
/// Generated values are not checked against the originals.
pub fn create_uuids_map<G: UuidSource>(uuids: &UuidSet, source: &G) -> ReplacementMap {
    let mut map = ReplacementMap::new();
    for original in uuids.iter() {
        map.insert(original, source.generate());
    }
    map
}
