//! Hyperlink corpus in CSR (Compressed Sparse Row) form
//!
//! Pages are addressed by a dense [`PageId`] assigned in insertion order. Outbound
//! links live in a forward CSR, inbound links in a reverse CSR so the iterative
//! ranker can gather contributions per target page.
//!
//! # Layout
//!
//! ```text
//! Corpus: a → b, a → c, b → c, c → (dead end)
//!
//! Forward CSR (after dead-end normalization):
//!   row_offsets: [0, 2, 3, 6]   // a: [0..2), b: [2..3), c: [3..6)
//!   col_indices: [1, 2, 2, 0, 1, 2]
//! ```
//!
//! A page without outbound links is rewritten to link to every page, itself
//! included, so random-surfer probability mass can never get trapped.

use crate::algorithms::Distribution;
use crate::error::RankError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Page identifier (zero-indexed, insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Position of the page in corpus order
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable, self-consistent hyperlink graph
///
/// # Example
///
/// ```
/// use surfer_rank::Corpus;
///
/// let corpus = Corpus::from_links([
///     ("1.html", vec!["2.html"]),
///     ("2.html", vec![]),
/// ]).unwrap();
///
/// assert_eq!(corpus.num_pages(), 2);
/// // Dead end normalized to link everywhere
/// assert_eq!(corpus.links_of("2.html").unwrap(), vec!["1.html", "2.html"]);
/// ```
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Page names in insertion order, shared with every distribution built from
    /// this corpus
    pages: Arc<[String]>,

    /// Name lookup, shared with every distribution built from this corpus
    index: Arc<HashMap<String, PageId>>,

    /// Forward CSR: page i's links are `col_indices[row_offsets[i]..row_offsets[i + 1]]`
    row_offsets: Vec<u32>,
    col_indices: Vec<u32>,

    /// Reverse CSR: pages linking to i
    rev_row_offsets: Vec<u32>,
    rev_col_indices: Vec<u32>,

    /// `true` where the page had no outbound links before normalization
    normalized: Vec<bool>,
}

impl Corpus {
    /// Build a corpus from raw page → links data
    ///
    /// Page order is the order in which keys first appear; a repeated key merges its
    /// links into the earlier entry. Duplicate links collapse. Every link target must
    /// itself be a key.
    ///
    /// # Errors
    ///
    /// - [`RankError::EmptyCorpus`] if `raw` yields no pages
    /// - [`RankError::DanglingLink`] if a link names a page that is not a key
    pub fn from_links<I, P, L, T>(raw: I) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::build(raw, true)
    }

    /// Like [`Corpus::from_links`], but links to pages outside the corpus are dropped
    ///
    /// # Errors
    ///
    /// Returns [`RankError::EmptyCorpus`] if `raw` yields no pages
    pub fn from_links_lenient<I, P, L, T>(raw: I) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::build(raw, false)
    }

    #[allow(clippy::cast_possible_truncation)] // Corpora >4B pages not supported
    fn build<I, P, L, T>(raw: I, strict: bool) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        // Pass 1: register pages, keep raw link names until every key is known
        let mut names: Vec<String> = Vec::new();
        let mut index: HashMap<String, PageId> = HashMap::new();
        let mut raw_links: Vec<Vec<String>> = Vec::new();

        for (page, links) in raw {
            let page = page.into();
            let id = match index.get(&page) {
                Some(&id) => id,
                None => {
                    let id = PageId(names.len() as u32);
                    index.insert(page.clone(), id);
                    names.push(page);
                    raw_links.push(Vec::new());
                    id
                }
            };
            raw_links[id.index()].extend(links.into_iter().map(Into::into));
        }

        if names.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        let num_pages = names.len();

        // Pass 2: resolve targets into adjacency lists
        let mut adj_list: Vec<Vec<u32>> = Vec::with_capacity(num_pages);
        for (src, links) in raw_links.into_iter().enumerate() {
            let mut targets = Vec::with_capacity(links.len());
            for link in links {
                match index.get(&link) {
                    Some(dst) => targets.push(dst.0),
                    None if strict => {
                        return Err(RankError::DanglingLink {
                            from: names[src].clone(),
                            to: link,
                        });
                    }
                    None => {}
                }
            }
            targets.sort_unstable();
            targets.dedup();
            adj_list.push(targets);
        }

        // Dead ends link to every page, self included
        let mut normalized = vec![false; num_pages];
        for (src, targets) in adj_list.iter_mut().enumerate() {
            if targets.is_empty() {
                targets.extend(0..num_pages as u32);
                normalized[src] = true;
            }
        }

        let mut rev_adj_list: Vec<Vec<u32>> = vec![Vec::new(); num_pages];
        for (src, targets) in adj_list.iter().enumerate() {
            for &dst in targets {
                rev_adj_list[dst as usize].push(src as u32);
            }
        }

        let (row_offsets, col_indices) = compress(&adj_list);
        let (rev_row_offsets, rev_col_indices) = compress(&rev_adj_list);

        debug!(
            pages = num_pages,
            links = col_indices.len(),
            dead_ends = normalized.iter().filter(|&&n| n).count(),
            "built corpus"
        );

        Ok(Self {
            pages: names.into(),
            index: Arc::new(index),
            row_offsets,
            col_indices,
            rev_row_offsets,
            rev_col_indices,
            normalized,
        })
    }

    /// Number of pages (N)
    #[must_use]
    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Number of links after normalization
    #[must_use]
    pub fn num_links(&self) -> usize {
        self.col_indices.len()
    }

    /// Page names in corpus order
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Distribution over this corpus' pages, `values` in [`PageId`] order
    pub(crate) fn distribution(&self, values: Vec<f64>) -> Distribution {
        Distribution::new(Arc::clone(&self.pages), Arc::clone(&self.index), values)
    }

    /// Look up a page by name
    #[must_use]
    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.index.get(name).copied()
    }

    /// Resolve a page name, failing for unknown pages
    ///
    /// # Errors
    ///
    /// Returns [`RankError::UnknownPage`] if `name` is not in the corpus
    pub fn require(&self, name: &str) -> Result<PageId, RankError> {
        self.page_id(name)
            .ok_or_else(|| RankError::UnknownPage(name.to_string()))
    }

    /// Name of a page
    #[must_use]
    pub fn page_name(&self, page: PageId) -> Option<&str> {
        self.pages.get(page.index()).map(String::as_str)
    }

    /// Pages linked to by `page` (ascending `PageId`, no duplicates)
    ///
    /// # Panics
    ///
    /// Panics if `page` does not belong to this corpus
    #[must_use]
    pub fn outgoing(&self, page: PageId) -> &[u32] {
        let idx = page.index();
        let start = self.row_offsets[idx] as usize;
        let end = self.row_offsets[idx + 1] as usize;
        &self.col_indices[start..end]
    }

    /// Pages linking to `page`
    ///
    /// # Panics
    ///
    /// Panics if `page` does not belong to this corpus
    #[must_use]
    pub fn incoming(&self, page: PageId) -> &[u32] {
        let idx = page.index();
        let start = self.rev_row_offsets[idx] as usize;
        let end = self.rev_row_offsets[idx + 1] as usize;
        &self.rev_col_indices[start..end]
    }

    /// Number of outbound links (never zero after normalization)
    #[must_use]
    pub fn out_degree(&self, page: PageId) -> usize {
        let idx = page.index();
        (self.row_offsets[idx + 1] - self.row_offsets[idx]) as usize
    }

    /// Whether the page was a dead end rewritten to link everywhere
    #[must_use]
    pub fn is_normalized(&self, page: PageId) -> bool {
        self.normalized.get(page.index()).copied().unwrap_or(false)
    }

    /// Outbound link names of a page
    ///
    /// # Errors
    ///
    /// Returns [`RankError::UnknownPage`] if `name` is not in the corpus
    pub fn links_of(&self, name: &str) -> Result<Vec<&str>, RankError> {
        let id = self.require(name)?;
        Ok(self
            .outgoing(id)
            .iter()
            .map(|&dst| self.pages[dst as usize].as_str())
            .collect())
    }

    /// Iterate `(page, outbound links)` in corpus order
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter_links(&self) -> impl Iterator<Item = (PageId, &[u32])> + '_ {
        (0..self.num_pages()).map(move |idx| {
            let page = PageId(idx as u32);
            (page, self.outgoing(page))
        })
    }
}

/// Flatten adjacency lists into `(row_offsets, col_indices)`
#[allow(clippy::cast_possible_truncation)] // Corpora with >4B links not supported
fn compress(adj_list: &[Vec<u32>]) -> (Vec<u32>, Vec<u32>) {
    let mut row_offsets = Vec::with_capacity(adj_list.len() + 1);
    let mut col_indices = Vec::with_capacity(adj_list.iter().map(Vec::len).sum());

    let mut offset = 0_u32;
    row_offsets.push(offset);

    for neighbors in adj_list {
        offset += neighbors.len() as u32;
        row_offsets.push(offset);
        col_indices.extend_from_slice(neighbors);
    }

    (row_offsets, col_indices)
}
