//! Usage counting and ranking of launched items.
//!
//! Two artifacts are kept under the cache directory: the frequency table
//! (JSON object of item to count) and the ordered list derived from it
//! (one item per line, most used first). The ordered list is always fully
//! regenerated from the table and never patched in place.

use indexmap::{IndexMap, IndexSet};
use log::{debug, info};

use crate::catalog::read_catalog;
use crate::config::CachePaths;
use crate::error::Result;
use crate::file_handling::{
    read_optional_json, read_optional_text, write_json_atomically, write_lines_atomically,
};

const FREQUENCY_DESCRIPTION: &str = "usage frequency";
const ORDERED_DESCRIPTION: &str = "usage order";

/// Item to number of times it was chosen, in first-use order.
pub type FrequencyTable = IndexMap<String, u64>;

/// Keeps only the entries present in `catalog`, counts unchanged and
/// relative order preserved.
pub fn filter_frequency_table(
    table: &FrequencyTable,
    catalog: &IndexSet<String>,
) -> FrequencyTable {
    table
        .iter()
        .filter(|(item, _)| catalog.contains(*item))
        .map(|(item, count)| (item.clone(), *count))
        .collect()
}

/// Items sorted by descending count. Ties keep their order in the table.
pub fn rank_items(table: &FrequencyTable) -> Vec<String> {
    let mut entries: Vec<(&String, &u64)> = table.iter().collect();
    // Stable sort, so equal counts stay in table order
    entries.sort_by(|(_, a), (_, b)| b.cmp(a));
    entries.into_iter().map(|(item, _)| item.clone()).collect()
}

/// Records launches and keeps the frequency-ordered list in step with the catalog.
#[derive(Debug, Clone)]
pub struct UsageRanker {
    paths: CachePaths,
}

impl UsageRanker {
    pub fn new(paths: CachePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &CachePaths {
        &self.paths
    }

    /// Reads the frequency table, `None` when it has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is not a JSON object of
    /// non-negative integer counts.
    pub fn frequency_table(&self) -> Result<Option<FrequencyTable>> {
        read_optional_json(FREQUENCY_DESCRIPTION, &self.paths.frequency)
    }

    /// Increments the count for `item`, starting it at 1, and writes the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing table is malformed or the write fails.
    pub fn record_use(&self, item: &str) -> Result<u64> {
        let mut table = self.frequency_table()?.unwrap_or_default();

        let count = table.entry(item.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;

        write_json_atomically(FREQUENCY_DESCRIPTION, &self.paths.frequency, &table)?;
        debug!("Recorded use of `{item}`, count is now {count}");

        Ok(count)
    }

    /// Drops usage of items that are no longer in the catalog and regenerates
    /// the ordered list.
    ///
    /// A missing catalog counts as an empty one, so every entry is dropped. A
    /// missing frequency table leaves the table absent, empties an existing
    /// ordered list and does not create one that did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or frequency table is malformed, or if
    /// writing either artifact fails.
    pub fn clean_frequently_used_items(&self) -> Result<()> {
        let catalog = read_catalog(&self.paths.catalog)?.unwrap_or_else(|| {
            debug!("No catalog at `{}`, treating every item as invalid", self.paths.catalog);
            IndexSet::new()
        });

        let Some(table) = self.frequency_table()? else {
            return self.clear_ordered_if_present();
        };

        let filtered = filter_frequency_table(&table, &catalog);
        let dropped = table.len() - filtered.len();
        if dropped > 0 {
            info!("Removed {dropped} items no longer available from usage history");
        }

        write_json_atomically(FREQUENCY_DESCRIPTION, &self.paths.frequency, &filtered)?;
        write_lines_atomically(
            ORDERED_DESCRIPTION,
            &self.paths.ordered,
            &rank_items(&filtered),
        )
    }

    fn clear_ordered_if_present(&self) -> Result<()> {
        if read_optional_text(ORDERED_DESCRIPTION, &self.paths.ordered)?.is_none() {
            return Ok(());
        }

        write_lines_atomically::<String>(ORDERED_DESCRIPTION, &self.paths.ordered, &[])
    }

    /// The ordered list as last written, most used first. Empty when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn ordered_items(&self) -> Result<Vec<String>> {
        let content = read_optional_text(ORDERED_DESCRIPTION, &self.paths.ordered)?;

        Ok(content
            .map(|content| {
                content
                    .lines()
                    .filter(|line| !line.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn ranker(dir: &TempDir) -> UsageRanker {
        UsageRanker::new(CachePaths::new(dir.path().to_str().unwrap()))
    }

    fn table(entries: &[(&str, u64)]) -> FrequencyTable {
        entries
            .iter()
            .map(|(item, count)| (item.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_rank_items_ties_keep_table_order() {
        let table = table(&[("a", 1), ("b", 3), ("c", 1), ("d", 3)]);
        assert_eq!(rank_items(&table), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_filter_frequency_table() {
        let table = table(&[("keep", 2), ("drop", 9), ("also", 1)]);
        let catalog: IndexSet<String> = ["also", "keep"].iter().map(ToString::to_string).collect();

        let filtered = filter_frequency_table(&table, &catalog);
        let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["keep", "also"]);
        assert_eq!(filtered["keep"], 2);
    }

    #[test]
    fn test_record_use_creates_and_increments() {
        let dir = TempDir::new().unwrap();
        let ranker = ranker(&dir);

        assert_eq!(ranker.record_use("firefox").unwrap(), 1);
        assert_eq!(ranker.record_use("htop").unwrap(), 1);
        assert_eq!(ranker.record_use("firefox").unwrap(), 2);

        let table = ranker.frequency_table().unwrap().unwrap();
        assert_eq!(table["firefox"], 2);
        assert_eq!(table["htop"], 1);
        // Recording does not touch the ordered list
        assert!(!Path::new(&ranker.paths().ordered).exists());
    }

    #[test]
    fn test_record_use_in_missing_cache_dir() {
        let dir = TempDir::new().unwrap();
        let cache_dir = dir.path().join("not/yet/created");
        let ranker = UsageRanker::new(CachePaths::new(cache_dir.to_str().unwrap()));

        ranker.record_use("firefox").unwrap();
        assert!(Path::new(&ranker.paths().frequency).exists());
    }

    #[test]
    fn test_record_use_malformed_table_is_not_repaired() {
        let dir = TempDir::new().unwrap();
        let ranker = ranker(&dir);
        fs::write(&ranker.paths().frequency, "[1, 2, 3]").unwrap();

        let result = ranker.record_use("firefox");
        assert!(matches!(result, Err(Error::Json { .. })));
        assert_eq!(
            fs::read_to_string(&ranker.paths().frequency).unwrap(),
            "[1, 2, 3]"
        );
    }

    #[test]
    fn test_negative_counts_are_malformed() {
        let dir = TempDir::new().unwrap();
        let ranker = ranker(&dir);
        fs::write(&ranker.paths().frequency, r#"{"firefox": -1}"#).unwrap();

        assert!(matches!(
            ranker.frequency_table(),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn test_ordered_items_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(ranker(&dir).ordered_items().unwrap().is_empty());
    }

    #[test]
    fn test_clean_empties_stale_ordered_list_without_table() {
        let dir = TempDir::new().unwrap();
        let ranker = ranker(&dir);
        fs::write(&ranker.paths().catalog, "firefox\n").unwrap();
        fs::write(&ranker.paths().ordered, "firefox\n").unwrap();

        ranker.clean_frequently_used_items().unwrap();

        assert_eq!(fs::read_to_string(&ranker.paths().ordered).unwrap(), "");
        assert!(!Path::new(&ranker.paths().frequency).exists());
    }
}
