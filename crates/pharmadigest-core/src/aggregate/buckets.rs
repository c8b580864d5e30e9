use std::collections::BTreeMap;

use super::record::CategorizedRecord;
use crate::classify::Category;

/// The four per-category record collections; every category is always present
#[derive(Debug, Clone)]
pub struct CategoryBuckets {
    buckets: BTreeMap<Category, Vec<CategorizedRecord>>,
}

impl Default for CategoryBuckets {
    fn default() -> Self {
        Self {
            buckets: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }
}

impl CategoryBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, record: CategorizedRecord) {
        self.buckets.entry(category).or_default().push(record);
    }

    pub fn get(&self, category: Category) -> &[CategorizedRecord] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }

    /// Sum of per-category counts. An article filed under two categories counts twice.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Buckets in report order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CategorizedRecord])> {
        self.buckets.iter().map(|(category, records)| (*category, records.as_slice()))
    }
}
