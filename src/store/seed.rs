use crate::models::{answer::Answer, question::Question};

fn options(correct: &str, wrong: &[&str]) -> Vec<Answer> {
    let mut answers = vec![Answer {
        answer_text: correct.to_string(),
        is_correct: true,
    }];
    answers.extend(wrong.iter().map(|text| Answer {
        answer_text: text.to_string(),
        is_correct: false,
    }));
    answers
}

fn question(id: i32, text: &str, answer_options: Vec<Answer>, difficulty: i32) -> Question {
    Question {
        id,
        question_text: text.to_string(),
        answer_options,
        difficulty,
    }
}

/// Built-in question set served when no questions file is configured.
pub fn default_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "What is the capital of France?",
            options("Paris", &["Lyon", "Marseille", "Nice"]),
            1,
        ),
        question(
            2,
            "Which planet is known as the Red Planet?",
            options("Mars", &["Venus", "Jupiter", "Mercury"]),
            1,
        ),
        question(
            3,
            "What is the chemical symbol for gold?",
            options("Au", &["Ag", "Gd", "Go"]),
            2,
        ),
        question(
            4,
            "In which year did the Berlin Wall fall?",
            options("1989", &["1987", "1991", "1979"]),
            2,
        ),
        question(
            5,
            "What is the smallest prime number greater than 90?",
            options("97", &["91", "93", "95"]),
            3,
        ),
        question(
            6,
            "Which element has the highest electronegativity?",
            options("Fluorine", &["Oxygen", "Chlorine", "Nitrogen"]),
            3,
        ),
        question(
            7,
            "How many edges does an icosahedron have?",
            options("30", &["20", "12", "24"]),
            4,
        ),
        question(
            8,
            "Who proved the incompleteness theorems?",
            options("Kurt Gödel", &["David Hilbert", "Alan Turing", "Emmy Noether"]),
            4,
        ),
    ]
}
