//! Interview question generation from difficulty-keyed banks.
//!
//! One technical, one behavioral and one problem-solving pick, plus skill-triggered
//! technical follow-ups. Picks come from the caller's RNG so a seeded run repeats.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_QUESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Technical,
    Behavioral,
    ProblemSolving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

impl InterviewQuestion {
    fn new(question: &str, kind: QuestionKind) -> Self {
        Self {
            question: question.to_string(),
            kind,
        }
    }
}

const BEHAVIORAL: &[&str] = &[
    "Tell me about a challenging ML project you worked on",
    "Describe a time when you had to explain complex technical concepts to non-technical stakeholders",
    "How do you stay updated with the latest developments in AI/ML?",
    "Tell me about a time when your model didn't perform as expected",
];

const PYTHON_FOLLOW_UP: &str = "Explain the GIL in Python and its implications for multi-threading";
const FRAMEWORK_FOLLOW_UP: &str = "Compare TensorFlow and PyTorch - when would you use each?";

fn technical_bank(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Junior => &[
            "Explain the difference between supervised and unsupervised learning",
            "What is overfitting and how can you prevent it?",
            "Describe the basic workflow of a machine learning project",
            "What are the main types of neural network layers?",
        ],
        Difficulty::Mid => &[
            "How would you handle class imbalance in a dataset?",
            "Explain the bias-variance tradeoff in machine learning",
            "Describe different methods for feature selection",
            "How do you evaluate the performance of a regression model?",
        ],
        Difficulty::Senior => &[
            "Design a system for real-time fraud detection at scale",
            "How would you implement A/B testing for ML models in production?",
            "Explain different approaches to model interpretability",
            "Describe strategies for handling concept drift in production models",
        ],
    }
}

fn problem_solving_bank(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Junior => &[
            "How would you approach building a recommendation system?",
            "Design a simple chatbot architecture",
        ],
        Difficulty::Mid => &[
            "How would you build a system to detect duplicate content?",
            "Design an ML pipeline for processing streaming data",
        ],
        Difficulty::Senior => &[
            "Design a distributed training system for large language models",
            "How would you build a multi-modal AI system?",
        ],
    }
}

/// Skill checks are exact and case-sensitive: "python" does not trigger the GIL question.
pub fn generate_questions<R: Rng>(
    skills: &[String],
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<InterviewQuestion> {
    let banks = [
        (technical_bank(difficulty), QuestionKind::Technical),
        (BEHAVIORAL, QuestionKind::Behavioral),
        (problem_solving_bank(difficulty), QuestionKind::ProblemSolving),
    ];

    let mut questions: Vec<InterviewQuestion> = banks
        .iter()
        .filter_map(|(bank, kind)| bank.choose(rng).map(|q| InterviewQuestion::new(q, *kind)))
        .collect();

    let has = |name: &str| skills.iter().any(|s| s == name);

    if has("Python") {
        questions.push(InterviewQuestion::new(PYTHON_FOLLOW_UP, QuestionKind::Technical));
    }
    if has("TensorFlow") || has("PyTorch") {
        questions.push(InterviewQuestion::new(FRAMEWORK_FOLLOW_UP, QuestionKind::Technical));
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(Difficulty::Junior)]
    #[case(Difficulty::Mid)]
    #[case(Difficulty::Senior)]
    fn test_base_questions_come_from_difficulty_banks(#[case] difficulty: Difficulty) {
        let mut rng = StdRng::seed_from_u64(11);
        let questions = generate_questions(&[], difficulty, &mut rng);

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].kind, QuestionKind::Technical);
        assert!(technical_bank(difficulty).contains(&questions[0].question.as_str()));
        assert_eq!(questions[1].kind, QuestionKind::Behavioral);
        assert!(BEHAVIORAL.contains(&questions[1].question.as_str()));
        assert_eq!(questions[2].kind, QuestionKind::ProblemSolving);
        assert!(problem_solving_bank(difficulty).contains(&questions[2].question.as_str()));
    }

    #[test]
    fn test_python_and_framework_follow_ups() {
        let mut rng = StdRng::seed_from_u64(5);
        let questions =
            generate_questions(&skills(&["Python", "PyTorch"]), Difficulty::Senior, &mut rng);

        assert_eq!(questions.len(), MAX_QUESTIONS);
        assert_eq!(questions[3].question, PYTHON_FOLLOW_UP);
        assert_eq!(questions[4].question, FRAMEWORK_FOLLOW_UP);
        assert!(questions[3..].iter().all(|q| q.kind == QuestionKind::Technical));
    }

    #[test]
    fn test_skill_triggers_are_case_sensitive() {
        let mut rng = StdRng::seed_from_u64(5);
        let questions = generate_questions(&skills(&["python", "tensorflow"]), Difficulty::Mid, &mut rng);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn test_same_seed_same_questions() {
        let s = skills(&["TensorFlow"]);
        let first = generate_questions(&s, Difficulty::Junior, &mut StdRng::seed_from_u64(42));
        let second = generate_questions(&s, Difficulty::Junior, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let q = InterviewQuestion::new("Design a simple chatbot architecture", QuestionKind::ProblemSolving);
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["type"], "problem-solving");
        assert_eq!(value["question"], "Design a simple chatbot architecture");
    }

    #[test]
    fn test_difficulty_parses_lowercase() {
        let d: Difficulty = serde_json::from_str("\"senior\"").unwrap();
        assert_eq!(d, Difficulty::Senior);
        assert!(serde_json::from_str::<Difficulty>("\"principal\"").is_err());
    }
}
