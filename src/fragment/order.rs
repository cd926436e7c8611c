//! Canonical ordering of fragments.

use std::collections::BTreeMap;

use super::Fragment;
use crate::config::SectionCatalog;

/// Put fragments in catalog order, then the rest sorted by identifier.
///
/// Catalog names are mapped to identifiers before lookup. Catalog sections
/// with no fragment, and fragments with no catalog section, are tolerated.
/// Identifiers compare byte-wise, so the extras' order is case-sensitive.
pub fn order_fragments(fragments: Vec<Fragment>, catalog: &SectionCatalog) -> Vec<Fragment> {
    let mut by_id: BTreeMap<String, Fragment> =
        fragments.into_iter().map(|f| (f.id.clone(), f)).collect();

    let mut ordered: Vec<Fragment> = catalog
        .sections
        .iter()
        .filter_map(|section| by_id.remove(&section.id()))
        .collect();

    ordered.extend(by_id.into_values());
    ordered
}
