use polars::prelude::DataFrame;
use std::collections::HashMap;

/// The loaded dataset collection: output key → data frame.
///
/// Created fresh on every load, fully populated before it is returned and
/// owned entirely by the caller afterwards; the loader keeps no state.
#[derive(Debug, Clone, Default)]
pub struct SpatialData {
    frames: HashMap<String, DataFrame>,
}

impl SpatialData {
    /// Build a collection from per-entry key/frame pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, DataFrame)>) -> Self {
        Self {
            frames: entries.into_iter().collect(),
        }
    }

    /// Look up a dataset by its catalog key.
    pub fn get(&self, key: &str) -> Option<&DataFrame> {
        self.frames.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.frames.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Consume the collection and return the underlying map.
    pub fn into_inner(self) -> HashMap<String, DataFrame> {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_from_entries_and_lookup() {
        let df = df!("region" => ["cluster_0"], "value" => [1.0]).unwrap();
        let data = SpatialData::from_entries(vec![("PV, capacityMax".to_string(), df)]);

        assert_eq!(data.len(), 1);
        assert!(data.contains_key("PV, capacityMax"));
        assert!(data.get("Wind (onshore), capacityMax").is_none());
        assert_eq!(data.get("PV, capacityMax").unwrap().height(), 1);
    }

    #[test]
    fn test_into_inner_preserves_frames() {
        let df = df!("region" => ["cluster_0"], "value" => [1.0]).unwrap();
        let data = SpatialData::from_entries(vec![("key".to_string(), df.clone())]);

        let map = data.into_inner();
        assert!(map["key"].equals(&df));
    }
}
