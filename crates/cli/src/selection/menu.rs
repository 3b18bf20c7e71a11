use indexmap::IndexSet;
use itertools::Itertools;

/// Lines shown in the menu: the most used items first, then the rest of the
/// catalog in catalog order. Each item appears once.
pub fn build_menu_items(ordered: &[String], catalog: &IndexSet<String>) -> Vec<String> {
    ordered
        .iter()
        .chain(catalog.iter())
        .unique()
        .cloned()
        .collect()
}
