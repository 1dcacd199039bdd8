use crate::error::FetchError;

/// A question together with the keywords the player has to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    question: String,
    answers: Vec<String>,
}

impl Quiz {
    /// Build a quiz, dropping repeated answers while keeping the first occurrence.
    pub fn new(question: impl Into<String>, answers: Vec<String>) -> Result<Self, FetchError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(FetchError::MissingField("question"));
        }

        let mut unique: Vec<String> = Vec::with_capacity(answers.len());
        for answer in answers {
            if !unique.contains(&answer) {
                unique.push(answer);
            }
        }
        if unique.is_empty() {
            return Err(FetchError::NoAnswers);
        }

        Ok(Self {
            question,
            answers: unique,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn contains(&self, word: &str) -> bool {
        self.answers.iter().any(|answer| answer == word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    TimedOut,
}

/// Per-session progress: time left and the answers found so far, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub remaining_seconds: u32,
    pub found: Vec<String>,
}

impl Round {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            remaining_seconds: total_seconds,
            found: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading { request_id: u64 },
    LoadFailed { message: String },
    Playing(Round),
    Finished { outcome: Outcome, round: Round },
}

/// Result of feeding one word to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The session is not accepting words.
    Ignored,
    Miss,
    /// The word was already found earlier in this session.
    Repeat,
    Hit,
    /// The word was a hit and completed the answer set.
    Won,
}

impl Submission {
    pub fn is_hit(self) -> bool {
        matches!(self, Submission::Hit | Submission::Won)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Fetch { request_id: u64 },
}

#[derive(Debug)]
pub enum FetchResponse {
    Loaded { request_id: u64, quiz: Quiz },
    Failed { request_id: u64, error: FetchError },
}

impl FetchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            FetchResponse::Loaded { request_id, .. } | FetchResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }

    pub fn into_result(self) -> Result<Quiz, FetchError> {
        match self {
            FetchResponse::Loaded { quiz, .. } => Ok(quiz),
            FetchResponse::Failed { error, .. } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_quiz_creation() {
        let quiz = Quiz::new(
            "What are all the java keywords?",
            words(&["abstract", "assert"]),
        )
        .unwrap();
        assert_eq!(quiz.question(), "What are all the java keywords?");
        assert_eq!(quiz.answers().len(), 2);
        assert!(quiz.contains("assert"));
        assert!(!quiz.contains("Assert"));
    }

    #[test]
    fn test_quiz_drops_duplicate_answers_in_order() {
        let quiz = Quiz::new("Q?", words(&["int", "for", "int", "do", "for"]))
            .unwrap();
        assert_eq!(quiz.answers(), &words(&["int", "for", "do"])[..]);
    }

    #[test]
    fn test_quiz_rejects_empty_question() {
        let err = Quiz::new("  ", words(&["int"])).unwrap_err();
        assert!(matches!(err, FetchError::MissingField("question")));
    }

    #[test]
    fn test_quiz_rejects_empty_answers() {
        let err = Quiz::new("Q?", Vec::new()).unwrap_err();
        assert!(matches!(err, FetchError::NoAnswers));
    }

    #[test]
    fn test_fetch_response_helpers() {
        let quiz = Quiz::new("Q?", words(&["a"])).unwrap();
        let loaded = FetchResponse::Loaded {
            request_id: 3,
            quiz: quiz.clone(),
        };
        assert_eq!(loaded.request_id(), 3);
        assert_eq!(loaded.into_result().unwrap(), quiz);

        let failed = FetchResponse::Failed {
            request_id: 4,
            error: FetchError::NoAnswers,
        };
        assert_eq!(failed.request_id(), 4);
        assert!(failed.into_result().is_err());
    }

    #[test]
    fn test_submission_is_hit() {
        assert!(Submission::Hit.is_hit());
        assert!(Submission::Won.is_hit());
        assert!(!Submission::Repeat.is_hit());
        assert!(!Submission::Miss.is_hit());
        assert!(!Submission::Ignored.is_hit());
    }
}
