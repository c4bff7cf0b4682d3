//! Picks the next question of a quiz round.
//!
//! Rounds hold no server-side state: the caller resends every id it has
//! already been asked, and a draw only ever considers the questions outside
//! that set, so a round always ends once the pool is used up.

use crate::storage::{QuestionStore, StoreError};
use rand::seq::IndexedRandom;
use rand::Rng;
use shared_types::Question;
use std::collections::HashSet;

/// Category id the frontend sends for "all categories".
pub const ALL_CATEGORIES_ID: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(i64),
}

impl From<i64> for QuizCategory {
    fn from(id: i64) -> Self {
        if id == ALL_CATEGORIES_ID {
            QuizCategory::All
        } else {
            QuizCategory::Category(id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    Question(Question),
    Exhausted,
}

/// Uniformly draws one question from `pool` whose id is not in `previous`.
pub fn select_unseen<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> QuizDraw {
    let unseen: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    match unseen.choose(rng) {
        Some(question) => QuizDraw::Question(question.clone()),
        None => QuizDraw::Exhausted,
    }
}

/// Builds the pool for `category` from the store and draws from it.
pub async fn next_question<S, R>(
    store: &S,
    category: QuizCategory,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Result<QuizDraw, StoreError>
where
    S: QuestionStore + ?Sized,
    R: Rng + ?Sized,
{
    let pool = match category {
        QuizCategory::All => store.list_all().await?,
        QuizCategory::Category(id) => store.list_by_category(id).await?,
    };
    Ok(select_unseen(pool, previous, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryQuestionStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::NewQuestion;

    fn pool(ids: &[i64]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("Question {id}"),
                answer: "answer".to_string(),
                category: 1,
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn zero_id_means_all_categories() {
        assert_eq!(QuizCategory::from(0), QuizCategory::All);
        assert_eq!(QuizCategory::from(4), QuizCategory::Category(4));
    }

    #[test]
    fn never_returns_previous_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous: HashSet<i64> = [1, 2, 3, 5].into_iter().collect();
        for _ in 0..50 {
            match select_unseen(pool(&[1, 2, 3, 4, 5, 6]), &previous, &mut rng) {
                QuizDraw::Question(q) => assert!(q.id == 4 || q.id == 6),
                QuizDraw::Exhausted => panic!("pool still has unseen questions"),
            }
        }
    }

    #[test]
    fn round_exhausts_after_every_question_is_asked() {
        let mut rng = StdRng::seed_from_u64(42);
        let ids = [10, 11, 12, 13, 14];
        let mut previous = HashSet::new();

        for _ in 0..ids.len() {
            match select_unseen(pool(&ids), &previous, &mut rng) {
                QuizDraw::Question(q) => assert!(previous.insert(q.id)),
                QuizDraw::Exhausted => panic!("exhausted too early"),
            }
        }

        assert_eq!(previous.len(), ids.len());
        assert_eq!(
            select_unseen(pool(&ids), &previous, &mut rng),
            QuizDraw::Exhausted
        );
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_unseen(Vec::new(), &HashSet::new(), &mut rng),
            QuizDraw::Exhausted
        );
    }

    #[test]
    fn foreign_previous_ids_do_not_exhaust_the_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let previous: HashSet<i64> = [100, 200, 300].into_iter().collect();
        match select_unseen(pool(&[1]), &previous, &mut rng) {
            QuizDraw::Question(q) => assert_eq!(q.id, 1),
            QuizDraw::Exhausted => panic!("question 1 was never asked"),
        }
    }

    #[test]
    fn same_seed_gives_same_draw() {
        let ids: Vec<i64> = (1..=20).collect();
        let previous = HashSet::new();
        let first = select_unseen(pool(&ids), &previous, &mut StdRng::seed_from_u64(9));
        let second = select_unseen(pool(&ids), &previous, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn all_categories_draws_from_full_pool() {
        let store = InMemoryQuestionStore::with_categories([(1, "Science"), (2, "Art")]);
        let science = store.create(NewQuestion::new("S", "A", 1, 1)).await.unwrap();
        let art = store.create(NewQuestion::new("R", "A", 1, 2)).await.unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let previous: HashSet<i64> = [science.id].into_iter().collect();

        let draw = next_question(&store, QuizCategory::All, &previous, &mut rng)
            .await
            .unwrap();
        assert_eq!(draw, QuizDraw::Question(art));

        let draw = next_question(&store, QuizCategory::Category(1), &previous, &mut rng)
            .await
            .unwrap();
        assert_eq!(draw, QuizDraw::Exhausted);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let store = InMemoryQuestionStore::with_categories([(1, "Science")]);
        let mut rng = StdRng::seed_from_u64(5);
        let result =
            next_question(&store, QuizCategory::Category(8), &HashSet::new(), &mut rng).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
