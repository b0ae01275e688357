//! Probability distributions over corpus pages
//!
//! Transition distributions and rank vectors share one representation: a dense
//! vector of probabilities indexed by [`PageId`], plus shared handles on the page
//! names and the name index so lookups by name and ordered iteration need no
//! reference to the corpus.

use crate::storage::PageId;
use std::collections::HashMap;
use std::sync::Arc;

/// Page → probability mapping, in corpus order
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pages: Arc<[String]>,
    index: Arc<HashMap<String, PageId>>,
    values: Vec<f64>,
}

/// Estimated `PageRank` for every page
pub type RankVector = Distribution;

/// Next-page probabilities for a random surfer
pub type TransitionDistribution = Distribution;

impl Distribution {
    pub(crate) fn new(
        pages: Arc<[String]>,
        index: Arc<HashMap<String, PageId>>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(pages.len(), values.len());
        debug_assert_eq!(pages.len(), index.len());
        Self {
            pages,
            index,
            values,
        }
    }

    /// Number of pages covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the distribution covers no pages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Probability of a page by name
    #[must_use]
    pub fn get(&self, page: &str) -> Option<f64> {
        self.index.get(page).and_then(|&id| self.get_by_id(id))
    }

    /// Probability of a page by id
    #[must_use]
    pub fn get_by_id(&self, page: PageId) -> Option<f64> {
        self.values.get(page.index()).copied()
    }

    /// Probabilities indexed by [`PageId`]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Page names in corpus order
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Iterate `(page, probability)` in corpus order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.pages
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Total probability mass
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Whether both distributions cover the same pages in the same order
    #[must_use]
    pub fn same_pages(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pages, &other.pages) || self.pages == other.pages
    }

    /// Largest absolute per-page difference to another distribution over the same pages
    ///
    /// # Panics
    ///
    /// Panics if `other` covers different pages (see [`Distribution::same_pages`]).
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        assert!(
            self.same_pages(other),
            "max_abs_diff across distributions over different pages"
        );
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Page with the highest probability (first one on ties)
    #[must_use]
    pub fn top(&self) -> Option<(&str, f64)> {
        self.iter()
            .fold(None, |best: Option<(&str, f64)>, (page, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((page, p)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_over(prefix: &str, values: Vec<f64>) -> Distribution {
        let pages: Vec<String> = (0..values.len()).map(|i| format!("{prefix}{i}.html")).collect();
        let index = pages
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), PageId(i as u32)))
            .collect();
        Distribution::new(pages.into(), Arc::new(index), values)
    }

    fn dist(values: Vec<f64>) -> Distribution {
        dist_over("", values)
    }

    #[test]
    fn test_lookup_by_name_and_id() {
        let d = dist(vec![0.25, 0.75]);
        assert_eq!(d.get("1.html"), Some(0.75));
        assert_eq!(d.get("9.html"), None);
        assert_eq!(d.get_by_id(PageId(0)), Some(0.25));
        assert_eq!(d.get_by_id(PageId(2)), None);
    }

    #[test]
    fn test_iter_preserves_order() {
        let d = dist(vec![0.5, 0.3, 0.2]);
        let pages: Vec<&str> = d.iter().map(|(p, _)| p).collect();
        assert_eq!(pages, vec!["0.html", "1.html", "2.html"]);
        assert!((d.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = dist(vec![0.5, 0.5]);
        let b = dist(vec![0.4, 0.6]);
        assert!((a.max_abs_diff(&b) - 0.1).abs() < 1e-12);
        assert_eq!(a.max_abs_diff(&a), 0.0);
    }

    #[test]
    fn test_same_pages() {
        let a = dist(vec![0.5, 0.5]);
        assert!(a.same_pages(&a.clone()));
        assert!(a.same_pages(&dist(vec![0.1, 0.9])));
        assert!(!a.same_pages(&dist(vec![1.0])));
        assert!(!a.same_pages(&dist_over("x", vec![0.5, 0.5])));
    }

    #[test]
    #[should_panic(expected = "different pages")]
    fn test_max_abs_diff_rejects_other_pages() {
        let a = dist(vec![0.5, 0.5]);
        let b = dist_over("x", vec![0.5, 0.5]);
        let _ = a.max_abs_diff(&b);
    }

    #[test]
    #[should_panic(expected = "different pages")]
    fn test_max_abs_diff_rejects_shorter_distribution() {
        let a = dist(vec![0.5, 0.5]);
        let _ = a.max_abs_diff(&dist(vec![1.0]));
    }

    #[test]
    fn test_top_prefers_first_on_tie() {
        let d = dist(vec![0.4, 0.4, 0.2]);
        assert_eq!(d.top(), Some(("0.html", 0.4)));
    }
}
