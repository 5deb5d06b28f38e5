//! Favourite-genre aggregation.
//!
//! An actor's favourite genre is the genre of the movies they appear in most
//! often. Ties go to the alphabetically first genre name, so the result never
//! depends on the row order the store happens to return.

use std::cmp::Ordering;

use crate::store::{GenreFrequency, GenreFrequencySource, StoreError};
use crate::types::DbId;

/// Pick the favourite genre from grouped appearance counts.
///
/// Returns `None` when `frequencies` is empty.
pub fn select_favorite(frequencies: &[GenreFrequency]) -> Option<&str> {
    frequencies
        .iter()
        .max_by(|a, b| match a.frequency.cmp(&b.frequency) {
            // Reversed so the smaller name wins as the "maximum".
            Ordering::Equal => b.genre.cmp(&a.genre),
            other => other,
        })
        .map(|f| f.genre.as_str())
}

/// Computes favourite genres through a [`GenreFrequencySource`].
pub struct GenreAffinityAggregator<'a, S> {
    source: &'a S,
}

impl<'a, S: GenreFrequencySource> GenreAffinityAggregator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Appearance counts per genre, most frequent first, then by name.
    pub async fn frequencies(&self, actor_id: DbId) -> Result<Vec<GenreFrequency>, StoreError> {
        let mut rows = self.source.genre_frequencies(actor_id).await?;
        rows.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.genre.cmp(&b.genre)));
        Ok(rows)
    }

    /// The actor's favourite genre, or `None` if they have no appearances.
    pub async fn favorite_genre(&self, actor_id: DbId) -> Result<Option<String>, StoreError> {
        let rows = self.source.genre_frequencies(actor_id).await?;
        Ok(select_favorite(&rows).map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::store::StoreErrorKind;

    fn counts(pairs: &[(&str, i64)]) -> Vec<GenreFrequency> {
        pairs
            .iter()
            .map(|(genre, n)| GenreFrequency::new(*genre, *n))
            .collect()
    }

    struct FakeSource {
        by_actor: HashMap<DbId, Vec<GenreFrequency>>,
        offline: bool,
    }

    impl GenreFrequencySource for FakeSource {
        async fn genre_frequencies(&self, actor_id: DbId) -> Result<Vec<GenreFrequency>, StoreError> {
            if self.offline {
                return Err(StoreError::transport("database unavailable"));
            }
            Ok(self.by_actor.get(&actor_id).cloned().unwrap_or_default())
        }
    }

    fn source(actor_id: DbId, pairs: &[(&str, i64)]) -> FakeSource {
        FakeSource {
            by_actor: HashMap::from([(actor_id, counts(pairs))]),
            offline: false,
        }
    }

    // --- select_favorite ---

    #[test]
    fn picks_highest_count() {
        let rows = counts(&[("Action", 2), ("Horror", 7), ("Romance", 1)]);
        assert_eq!(select_favorite(&rows), Some("Horror"));
    }

    #[test]
    fn picks_highest_count_among_many() {
        let rows = counts(&[
            ("Action", 2),
            ("Romance", 1),
            ("Mystery", 4),
            ("Horror", 1),
            ("Thriller", 1),
        ]);
        assert_eq!(select_favorite(&rows), Some("Mystery"));
    }

    #[test]
    fn tie_goes_to_alphabetically_first() {
        assert_eq!(
            select_favorite(&counts(&[("Romance", 1), ("Horror", 1)])),
            Some("Horror")
        );
        assert_eq!(
            select_favorite(&counts(&[("Horror", 1), ("Romance", 1)])),
            Some("Horror")
        );
    }

    #[test]
    fn tie_ignores_lower_counts() {
        let rows = counts(&[("Action", 1), ("Drama", 3), ("Comedy", 3)]);
        assert_eq!(select_favorite(&rows), Some("Comedy"));
    }

    #[test]
    fn empty_counts_have_no_favorite() {
        assert_eq!(select_favorite(&[]), None);
    }

    // --- aggregator ---

    #[tokio::test]
    async fn favorite_genre_for_actor() {
        let src = source(1, &[("Action", 2), ("Horror", 7), ("Romance", 1)]);
        let favorite = GenreAffinityAggregator::new(&src).favorite_genre(1).await.unwrap();
        assert_eq!(favorite.as_deref(), Some("Horror"));
    }

    #[tokio::test]
    async fn actor_without_appearances_has_no_favorite() {
        let src = source(1, &[("Action", 2)]);
        let favorite = GenreAffinityAggregator::new(&src).favorite_genre(2).await.unwrap();
        assert_eq!(favorite, None);
    }

    #[tokio::test]
    async fn frequencies_are_sorted_by_count_then_name() {
        let src = source(1, &[("Romance", 1), ("Horror", 7), ("Action", 1)]);
        let rows = GenreAffinityAggregator::new(&src).frequencies(1).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.genre.as_str()).collect();
        assert_eq!(names, vec!["Horror", "Action", "Romance"]);
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let src = FakeSource {
            by_actor: HashMap::new(),
            offline: true,
        };
        let err = GenreAffinityAggregator::new(&src).favorite_genre(1).await.unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::Transport);
    }
}
