//! Output collections and the session-scoped data bank that stores them.

use crate::data::geometry::Geometry;
use crate::data::orbitals::MolecularOrbitals;

/// Append-only list of records published by one parse. The default selection
/// stays unset until a caller picks an item.
#[derive(Debug, Clone)]
pub struct RecordList<T> {
    pub items: Vec<T>,
    pub default_index: Option<usize>,
}

pub type GeometryList = RecordList<Geometry>;
pub type MolecularOrbitalsList = RecordList<MolecularOrbitals>;

impl<T> RecordList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            default_index: None,
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn default_item(&self) -> Option<&T> {
        self.default_index.and_then(|index| self.items.get(index))
    }
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-owned store receiving published collections, one list per
/// successful parse that produced data.
#[derive(Debug, Clone, Default)]
pub struct DataBank {
    pub geometry_lists: Vec<GeometryList>,
    pub orbital_lists: Vec<MolecularOrbitalsList>,
}

impl DataBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_geometries(&mut self, list: GeometryList) {
        self.geometry_lists.push(list);
    }

    pub fn publish_orbitals(&mut self, list: MolecularOrbitalsList) {
        self.orbital_lists.push(list);
    }

    pub fn geometry_count(&self) -> usize {
        self.geometry_lists.iter().map(RecordList::len).sum()
    }

    pub fn orbital_set_count(&self) -> usize {
        self.orbital_lists.iter().map(RecordList::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry_lists.is_empty() && self.orbital_lists.is_empty()
    }

    /// Parses checkpoint text and adopts whatever it publishes. Returns the
    /// parse success flag; callers that need the diagnostics use
    /// [`crate::parser::parse_checkpoint`] directly.
    pub fn load_checkpoint(&mut self, content: &str) -> bool {
        crate::parser::parse_checkpoint(content).publish_into(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataBank, GeometryList};
    use crate::data::geometry::Geometry;

    #[test]
    fn fresh_lists_carry_no_default_selection() {
        let mut list = GeometryList::new();
        assert!(list.is_empty());
        assert_eq!(list.default_index, None);
        assert!(list.default_item().is_none());

        list.push(Geometry::new(vec![1], vec![[0.0, 0.0, 0.0]]));
        assert_eq!(list.len(), 1);
        assert!(
            list.default_item().is_none(),
            "pushing items should not select a default"
        );

        list.default_index = Some(0);
        assert_eq!(list.default_item().map(Geometry::atom_count), Some(1));
    }

    #[test]
    fn bank_counts_span_all_published_lists() {
        let mut bank = DataBank::new();
        assert!(bank.is_empty());

        let mut first = GeometryList::new();
        first.push(Geometry::new(vec![8], vec![[0.0, 0.0, 0.0]]));
        first.push(Geometry::new(vec![8], vec![[1.0, 0.0, 0.0]]));
        bank.publish_geometries(first);

        let mut second = GeometryList::new();
        second.push(Geometry::new(vec![1], vec![[0.0, 0.0, 0.0]]));
        bank.publish_geometries(second);

        assert!(!bank.is_empty());
        assert_eq!(bank.geometry_lists.len(), 2);
        assert_eq!(bank.geometry_count(), 3);
        assert_eq!(bank.orbital_set_count(), 0);
    }

    #[test]
    fn load_checkpoint_publishes_only_successful_parses() {
        let good = [
            format!("{:<43}{}", "Atomic numbers", "I   N=           1"),
            "           1".to_string(),
            format!("{:<43}{}", "Current cartesian coordinates", "R   N=           3"),
            "  0.00000000E+00  0.00000000E+00  0.00000000E+00".to_string(),
        ]
        .join("\n");
        let bad = good.replace("  0.00000000E+00  0.00000000E+00  0.00000000E+00", "  bogus");

        let mut bank = DataBank::new();
        assert!(bank.load_checkpoint(&good));
        assert_eq!(bank.geometry_count(), 1);

        assert!(!bank.load_checkpoint(&bad));
        assert_eq!(
            bank.geometry_count(),
            1,
            "a failed parse should publish nothing"
        );
    }
}
