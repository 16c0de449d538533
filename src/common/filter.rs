use crate::{common::Fixture, feed::ArticleSummary};

/// Other articles about the same fixture as `current`, in input order
#[must_use]
pub fn related_articles(
    current: &ArticleSummary,
    candidates: &[ArticleSummary],
    limit: usize,
) -> Vec<ArticleSummary> {
    let key = current.fixture_key();
    candidates
        .iter()
        .filter(|art| art.id != current.id && art.fixture_key() == key)
        .take(limit)
        .cloned()
        .collect()
}
