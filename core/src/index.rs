use std::collections::HashMap;

/// On-disk ids are 8-byte unsigned integers.
pub type TermId = u64;
pub type DocId = u64;

/// The three read-only mappings a query session runs against.
///
/// Built once by [`crate::persist::load_index`]; never mutated afterwards,
/// so it can be shared freely across concurrent queries.
#[derive(Debug, Default)]
pub struct SearchIndex {
    pub terms: HashMap<String, TermId>,
    pub docs: HashMap<DocId, String>,
    /// Postings per term, strictly ascending doc ids, duplicate-free.
    pub postings: HashMap<TermId, Vec<DocId>>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Postings list for a term id, or the empty list when the dictionary
    /// and the postings index disagree about which terms exist.
    pub fn postings_for(&self, term_id: TermId) -> &[DocId] {
        self.postings.get(&term_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
