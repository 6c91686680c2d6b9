//! Service-level tests driving `TriviaService` against the in-memory store.
//!
//! These cover the observable contract end to end: pagination bounds,
//! category scoping, search semantics, create/delete, and complete quiz
//! sessions played to exhaustion.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use trivia_core::model::{NewQuestion, QuizState};
use trivia_core::service::{ServiceConfig, TriviaService};
use trivia_store::{seed, MemoryStore};

fn seeded_service() -> TriviaService {
    let store = Arc::new(MemoryStore::from_data(seed::starter_pack()));
    TriviaService::new(store, ServiceConfig::default())
}

#[tokio::test]
async fn first_page_holds_ten_of_nineteen() {
    let service = seeded_service();
    let page = service.questions(1).await.unwrap();
    assert_eq!(page.questions.len(), 10);
    assert_eq!(page.total_questions, 19);
    assert_eq!(page.categories.len(), 6);
    assert!(page.current_category.is_none());
}

#[tokio::test]
async fn second_page_holds_the_remainder() {
    let service = seeded_service();
    let page = service.questions(2).await.unwrap();
    assert_eq!(page.questions.len(), 9);
    assert_eq!(page.questions[0].id, 11);
    assert_eq!(page.total_questions, 19);
}

#[tokio::test]
async fn page_past_the_data_is_not_found() {
    let service = seeded_service();
    let err = service.questions(3).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn category_listing_scopes_and_names() {
    let service = seeded_service();
    let art = service.questions_in_category(2, None).await.unwrap();
    assert_eq!(art.current_category, "Art");
    assert_eq!(art.total_questions, 4);
    assert!(art.questions.iter().all(|q| q.category == 2));

    // Ordered ascending by id.
    let ids: Vec<u64> = art.questions.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let service = seeded_service();
    let err = service.questions_in_category(99, None).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_category_lists_as_empty_success() {
    let store = MemoryStore::from_data(trivia_store::StoreData {
        categories: vec![trivia_core::model::Category {
            id: 1,
            name: "Science".into(),
        }],
        questions: vec![],
    });
    let service = TriviaService::new(Arc::new(store), ServiceConfig::default());

    let listing = service.questions_in_category(1, None).await.unwrap();
    assert_eq!(listing.total_questions, 0);
    assert!(listing.questions.is_empty());
    assert_eq!(listing.current_category, "Science");
}

#[tokio::test]
async fn search_matches_case_insensitively() {
    let service = seeded_service();
    let lower = service.search("maya").await.unwrap();
    let upper = service.search("MAYA").await.unwrap();
    assert_eq!(lower.total_questions, 0); // "maya" is in the answer, not the text
    assert_eq!(lower.questions, upper.questions);

    let taj = service.search("taj mahal").await.unwrap();
    assert_eq!(taj.total_questions, 1);
    assert_eq!(taj.questions[0].answer, "Agra");
    assert_eq!(taj.questions, service.search("Taj Mahal").await.unwrap().questions);
    assert!(taj.current_category.is_none());
}

#[tokio::test]
async fn blank_search_terms_return_nothing() {
    let service = seeded_service();
    for term in ["", "   ", "\t\n"] {
        let results = service.search(term).await.unwrap();
        assert_eq!(results.total_questions, 0, "term {term:?} must match nothing");
        assert!(results.questions.is_empty());
    }
}

#[tokio::test]
async fn zero_match_search_is_an_empty_success() {
    let service = seeded_service();
    let results = service.search("xyzzy plugh").await.unwrap();
    assert_eq!(results.total_questions, 0);
}

#[tokio::test]
async fn create_then_appears_in_listing() {
    let service = seeded_service();
    let created = service
        .create(NewQuestion {
            text: "What is the chemical symbol for gold?".into(),
            answer: "Au".into(),
            category: 1,
            difficulty: 2,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 20);

    let page = service.questions(2).await.unwrap();
    assert_eq!(page.total_questions, 20);
    assert_eq!(page.questions.last().unwrap().id, 20);
}

#[tokio::test]
async fn create_with_empty_answer_persists_nothing() {
    let service = seeded_service();
    let err = service
        .create(NewQuestion {
            text: "A question with no answer?".into(),
            answer: "".into(),
            category: 1,
            difficulty: 1,
        })
        .await
        .unwrap_err();
    assert!(err.is_invalid());
    assert_eq!(service.questions(1).await.unwrap().total_questions, 19);
}

#[tokio::test]
async fn delete_then_gone() {
    let service = seeded_service();
    service.delete(11).await.unwrap();
    assert_eq!(service.questions(1).await.unwrap().total_questions, 18);
    assert!(service.delete(11).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn quiz_session_never_repeats_and_ends() {
    let service = seeded_service();
    let mut state = QuizState::in_category(6); // Sports has 2 questions
    let mut rng = StdRng::seed_from_u64(17);

    let first = service.next_question(&state, &mut rng).await.unwrap();
    let first = first.question.expect("two candidates available");
    state.record(first.id);

    let second = service.next_question(&state, &mut rng).await.unwrap();
    let second = second.question.expect("one candidate left");
    assert_ne!(second.id, first.id);
    state.record(second.id);

    let done = service.next_question(&state, &mut rng).await.unwrap();
    assert!(done.question.is_none(), "category exhausted, quiz over");
}

#[tokio::test]
async fn quiz_across_all_categories_exhausts_in_pool_size_draws() {
    let service = seeded_service();
    let mut state = QuizState::new();
    let mut rng = StdRng::seed_from_u64(4);

    let mut served = 0;
    loop {
        let draw = service.next_question(&state, &mut rng).await.unwrap();
        match draw.question {
            Some(q) => {
                assert!(!state.was_asked(q.id));
                state.record(q.id);
                served += 1;
                assert!(served <= 19);
            }
            None => break,
        }
    }
    assert_eq!(served, 19);
}

#[tokio::test]
async fn quiz_with_unknown_category_ends_immediately() {
    let service = seeded_service();
    let state = QuizState::in_category(42);
    let mut rng = StdRng::seed_from_u64(0);

    let draw = service.next_question(&state, &mut rng).await.unwrap();
    assert!(draw.question.is_none());
}

#[tokio::test]
async fn quiz_draw_serializes_null_question_when_over() {
    let service = seeded_service();
    let mut state = QuizState::in_category(6);
    state.record(6);
    state.record(7);
    let mut rng = StdRng::seed_from_u64(0);

    let draw = service.next_question(&state, &mut rng).await.unwrap();
    let json = serde_json::to_value(&draw).unwrap();
    assert!(json["question"].is_null());
}
