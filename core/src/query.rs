use crate::index::{DocId, SearchIndex};
use crate::intersect::intersect_all;

/// Outcome of one boolean AND query.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Doc ids containing every query term, ascending.
    pub doc_ids: Vec<DocId>,
    /// Display names for `doc_ids`, in the same order. An id with no
    /// entry in the document dictionary is skipped (and logged).
    pub docs: Vec<String>,
    /// Query terms absent from the term dictionary. Informational: the
    /// query still completes, with an empty overall result.
    pub unmatched: Vec<String>,
}

/// Lowercase the query and split on whitespace runs into non-empty tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Run a boolean AND query against a loaded index.
///
/// Every token is resolved before any merging happens, so the unmatched
/// list is complete even when the intersection short-circuits early. A
/// query with no tokens, or where no token resolves, yields an empty
/// result rather than all documents.
pub fn process(query: &str, index: &SearchIndex) -> QueryResult {
    let tokens = tokenize(query);
    let mut unmatched = Vec::new();
    let mut lists: Vec<&[DocId]> = Vec::with_capacity(tokens.len());
    for tok in &tokens {
        match index.terms.get(tok) {
            Some(&term_id) => lists.push(index.postings_for(term_id)),
            None => {
                if !unmatched.contains(tok) {
                    unmatched.push(tok.clone());
                }
                // An unknown term has an empty postings list, which makes
                // the AND result empty without aborting the query.
                lists.push(&[]);
            }
        }
    }

    let doc_ids = intersect_all(&lists);
    let docs = doc_ids
        .iter()
        .filter_map(|id| match index.docs.get(id) {
            Some(name) => Some(name.clone()),
            None => {
                tracing::warn!(doc_id = id, "matched doc id missing from document dictionary");
                None
            }
        })
        .collect();
    QueryResult { doc_ids, docs, unmatched }
}
