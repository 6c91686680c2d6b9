//! Starter data set.
//!
//! Six categories and nineteen classic questions, enough to demonstrate
//! pagination (two pages at the default size), category scoping, search,
//! and a full quiz session out of the box.

use trivia_core::model::{Category, Question};

use crate::memory::StoreData;

const CATEGORIES: &[(u64, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

// (id, text, answer, category, difficulty)
const QUESTIONS: &[(u64, &str, &str, u64, u8)] = &[
    (
        1,
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        2,
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    (
        3,
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    (
        4,
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        5,
        3,
    ),
    (5, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (
        6,
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        7,
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
    (8, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (9, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (
        10,
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    (11, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (
        12,
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        2,
        1,
    ),
    (13, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (14, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (
        15,
        "Which American artist was a pioneer of Abstract Expressionism and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    (16, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (17, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (
        18,
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    (
        19,
        "Which dung beetle was worshipped by the ancient Egyptians?",
        "Scarab",
        4,
        4,
    ),
];

/// The bundled starter deck.
pub fn starter_pack() -> StoreData {
    StoreData {
        categories: CATEGORIES
            .iter()
            .map(|&(id, name)| Category {
                id,
                name: name.into(),
            })
            .collect(),
        questions: QUESTIONS
            .iter()
            .map(|&(id, text, answer, category, difficulty)| Question {
                id,
                text: text.into(),
                answer: answer.into(),
                category,
                difficulty,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_pack_is_consistent() {
        let data = starter_pack();
        assert_eq!(data.categories.len(), 6);
        assert_eq!(data.questions.len(), 19);

        for q in &data.questions {
            assert!(
                data.categories.iter().any(|c| c.id == q.category),
                "question {} references unknown category {}",
                q.id,
                q.category
            );
            assert!((1..=5).contains(&q.difficulty));
            assert!(!q.text.trim().is_empty());
            assert!(!q.answer.trim().is_empty());
        }

        // Ids are unique and ascending.
        let ids: Vec<u64> = data.questions.iter().map(|q| q.id).collect();
        let expected: Vec<u64> = (1..=19).collect();
        assert_eq!(ids, expected);
    }
}
