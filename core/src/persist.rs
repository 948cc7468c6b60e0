use crate::error::{FormatError, Result};
use crate::index::{DocId, SearchIndex, TermId};
use byteorder::{LittleEndian, ReadBytesExt};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::thread;

/// Locations of the three index files.
///
/// Defaults preserve the file names the index builder writes, so an index
/// directory can be pointed at as-is; individual paths are public for
/// callers that lay the files out differently.
pub struct IndexPaths {
    pub terms: PathBuf,
    pub docs: PathBuf,
    pub postings: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            terms: root.join("wordIndex.bin"),
            docs: root.join("docIndex.bin"),
            postings: root.join("wordDocIndex.bin"),
        }
    }
}

/// Width and signedness of the length prefix on dictionary text fields.
///
/// The builder wrote the term dictionary with a signed 16-bit length and
/// the document dictionary with an unsigned one. Declaring the convention
/// per call site keeps the two formats from being silently misread as
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LenField {
    I16,
    U16,
}

/// All integers in the index files are little-endian, as written by the
/// builder; this module must not be pointed at files from a big-endian
/// producer.
type Endian = LittleEndian;

fn open_or_empty(path: &Path) -> Option<BufReader<File>> {
    match File::open(path) {
        Ok(f) => Some(BufReader::new(f)),
        Err(err) => {
            // An unopenable file resolves to an empty mapping: queries
            // against missing data simply return no matches.
            tracing::debug!(path = %path.display(), %err, "index file unavailable, using empty mapping");
            None
        }
    }
}

fn read_text<R: Read>(r: &mut R, len_field: LenField, record: u32) -> Result<String> {
    let len = match len_field {
        LenField::I16 => {
            let len = r.read_i16::<Endian>()?;
            if len < 0 {
                return Err(FormatError::NegativeLength { record, len });
            }
            len as usize
        }
        LenField::U16 => r.read_u16::<Endian>()? as usize,
    };
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|_| FormatError::InvalidText { record })
}

/// Term dictionary: `[u32 count][{u64 term_id, i16 len, len bytes}]*count`.
pub fn load_term_dictionary(path: &Path) -> Result<HashMap<String, TermId>> {
    let Some(mut r) = open_or_empty(path) else {
        return Ok(HashMap::new());
    };
    let count = r.read_u32::<Endian>()?;
    let mut dict = HashMap::with_capacity(count as usize);
    for record in 0..count {
        let id = r.read_u64::<Endian>()?;
        let term = read_text(&mut r, LenField::I16, record)?;
        match dict.entry(term) {
            Entry::Occupied(mut e) => {
                // Last-write-wins is the defined collision policy; the
                // builder is supposed to emit unique keys, so surface it.
                tracing::warn!(term = %e.key(), prev = *e.get(), new = id, "duplicate term in dictionary, keeping later id");
                e.insert(id);
            }
            Entry::Vacant(e) => {
                e.insert(id);
            }
        }
    }
    Ok(dict)
}

/// Document dictionary: `[u32 count][{u64 doc_id, u16 len, len bytes}]*count`.
pub fn load_doc_dictionary(path: &Path) -> Result<HashMap<DocId, String>> {
    let Some(mut r) = open_or_empty(path) else {
        return Ok(HashMap::new());
    };
    let count = r.read_u32::<Endian>()?;
    let mut docs = HashMap::with_capacity(count as usize);
    for record in 0..count {
        let id = r.read_u64::<Endian>()?;
        let name = read_text(&mut r, LenField::U16, record)?;
        if let Some(prev) = docs.insert(id, name) {
            tracing::warn!(doc_id = id, %prev, "duplicate doc id in dictionary, keeping later name");
        }
    }
    Ok(docs)
}

/// Postings index: `[{u64 term_id, u32 list_len, list_len x u64 doc_id}]*count`.
///
/// Format quirk: the record count lives in the LAST four bytes of the
/// file, not the first. The read is two-phase: seek to end-minus-4 for
/// the count, rewind to offset 0, then decode records sequentially.
/// Lists were sorted ascending by the builder and are trusted as-is,
/// never re-sorted.
pub fn load_postings(path: &Path) -> Result<HashMap<TermId, Vec<DocId>>> {
    let Some(mut r) = open_or_empty(path) else {
        return Ok(HashMap::new());
    };
    let file_len = r.seek(SeekFrom::End(0))?;
    if file_len < 4 {
        return Err(FormatError::TrailerTooShort(file_len));
    }
    r.seek(SeekFrom::End(-4))?;
    let count = r.read_u32::<Endian>()?;
    r.seek(SeekFrom::Start(0))?;

    // Everything before the trailer is record data; list lengths are
    // checked against it so a corrupt length field fails fast instead of
    // reading into the trailer or off the end of the file.
    let data_len = file_len - 4;
    let mut pos = 0u64;
    let mut postings = HashMap::with_capacity(count as usize);
    for record in 0..count {
        if data_len - pos < 12 {
            return Err(FormatError::Truncated { record, needed: 12, remaining: data_len - pos });
        }
        let term_id = r.read_u64::<Endian>()?;
        let list_len = r.read_u32::<Endian>()?;
        pos += 12;

        let needed = list_len as u64 * 8;
        if data_len - pos < needed {
            return Err(FormatError::Truncated { record, needed, remaining: data_len - pos });
        }
        let mut doc_ids = Vec::with_capacity(list_len as usize);
        for _ in 0..list_len {
            doc_ids.push(r.read_u64::<Endian>()?);
        }
        pos += needed;
        postings.insert(term_id, doc_ids);
    }
    Ok(postings)
}

/// Load all three index files and assemble a [`SearchIndex`].
///
/// The two dictionaries load on worker threads while the postings index
/// loads on the calling thread; the join is a strict barrier, so no query
/// can observe a partially loaded index. A missing file yields its empty
/// mapping; a malformed file fails the whole load.
pub fn load_index(paths: &IndexPaths) -> Result<SearchIndex> {
    thread::scope(|s| {
        let terms = s.spawn(|| load_term_dictionary(&paths.terms));
        let docs = s.spawn(|| load_doc_dictionary(&paths.docs));
        let postings = load_postings(&paths.postings);

        let terms = terms.join().expect("term dictionary loader panicked")?;
        let docs = docs.join().expect("document dictionary loader panicked")?;
        let postings = postings?;
        tracing::debug!(
            terms = terms.len(),
            docs = docs.len(),
            postings = postings.len(),
            "index loaded"
        );
        Ok(SearchIndex { terms, docs, postings })
    })
}
