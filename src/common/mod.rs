use std::collections::HashSet;

mod filter;

pub use filter::related_articles;

/// Identity of a fixture: the same two teams on the same date.
/// Compared byte for byte; no alias or case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixtureKey<'a> {
    pub home_team: &'a str,
    pub away_team: &'a str,
    pub match_date: &'a str,
}

/// Anything that is written about a single fixture
pub trait Fixture {
    fn fixture_key(&self) -> FixtureKey<'_>;
}

/// Pick the first `limit` items that cover distinct fixtures. The first item
/// seen for a fixture wins and the input order is kept.
pub fn select_unique_fixtures<T: Fixture + Clone>(articles: &[T], limit: usize) -> Vec<T> {
    let mut unique_items: Vec<T> = Vec::new();
    if limit == 0 {
        return unique_items;
    }

    let mut seen: HashSet<FixtureKey<'_>> = HashSet::new();
    for article in articles {
        if seen.insert(article.fixture_key()) {
            unique_items.push(article.clone());
            if unique_items.len() == limit {
                break;
            }
        }
    }

    unique_items
}
