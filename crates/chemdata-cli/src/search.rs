//! Ranked search over elements and compounds.
//!
//! Elements are scored against the query by name similarity; compounds come
//! from a plain substring query and share a fixed score. Hits are listed by
//! descending score, ties in input order.

use chemdata_model::{CompoundRecord, ElementRecord};

/// Score for an exact symbol/name match, or for every element on an empty query.
pub const EXACT_SCORE: u32 = 100;

/// Score for any row returned by a substring query.
pub const SUBSTRING_SCORE: u32 = 90;

#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    Element(ElementRecord),
    Compound(CompoundRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub hit: Hit,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementMatch {
    /// Levenshtein similarity on the name, kept at or above the threshold.
    Fuzzy { threshold: u32 },
    /// Elements were already filtered by a substring query.
    Substring,
}

/// Edit distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitute = prev_diag + usize::from(sc != lc);
            prev_diag = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[short.len()]
}

/// `100 - distance * 100 / max_len`, case-insensitive. Empty vs empty is 100.
pub fn similarity(query: &str, name: &str) -> u32 {
    let query = query.to_lowercase();
    let name = name.to_lowercase();
    let max_len = query.chars().count().max(name.chars().count());
    if max_len == 0 {
        return EXACT_SCORE;
    }
    let dist = levenshtein(&query, &name);
    (100 - dist * 100 / max_len) as u32
}

fn is_exact(query: &str, element: &ElementRecord) -> bool {
    query.eq_ignore_ascii_case(&element.symbol) || query.to_lowercase() == element.name.to_lowercase()
}

/// Score one element, or `None` when it should not be listed.
pub fn score_element(query: &str, element: &ElementRecord, mode: ElementMatch) -> Option<u32> {
    if query.is_empty() || is_exact(query, element) {
        return Some(EXACT_SCORE);
    }
    match mode {
        ElementMatch::Substring => Some(SUBSTRING_SCORE),
        ElementMatch::Fuzzy { threshold } => {
            let score = similarity(query, &element.name);
            (score > 0 && score >= threshold).then_some(score)
        }
    }
}

/// Merge scored elements and compounds, best first, at most `limit` hits.
pub fn rank(
    query: &str,
    elements: Vec<ElementRecord>,
    compounds: Vec<CompoundRecord>,
    mode: ElementMatch,
    limit: usize,
) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = elements
        .into_iter()
        .filter_map(|e| {
            score_element(query, &e, mode).map(|score| SearchHit {
                hit: Hit::Element(e),
                score,
            })
        })
        .collect();

    hits.extend(compounds.into_iter().map(|c| SearchHit {
        hit: Hit::Compound(c),
        score: SUBSTRING_SCORE,
    }));

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);
    hits
}
