use crate::error::FetchError;
use crate::models::Quiz;
use serde::Deserialize;

/// Quiz payload as served by the endpoint; both fields may be absent or null.
#[derive(Debug, Clone, Deserialize)]
struct WireQuiz {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<Vec<String>>,
}

impl TryFrom<WireQuiz> for Quiz {
    type Error = FetchError;

    fn try_from(wire: WireQuiz) -> Result<Self, Self::Error> {
        let question = wire.question.ok_or(FetchError::MissingField("question"))?;
        let answers = wire.answer.ok_or(FetchError::MissingField("answer"))?;
        Quiz::new(question, answers)
    }
}

pub fn parse_quiz(body: &str) -> Result<Quiz, FetchError> {
    let wire: WireQuiz = serde_json::from_str(body)?;
    Quiz::try_from(wire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;

    #[test]
    fn test_parse_valid_payload() {
        let quiz = parse_quiz(
            r#"{"question": "What are all the java keywords?", "answer": ["abstract", "assert", "boolean"]}"#,
        )
        .unwrap();
        assert_eq!(quiz.question(), "What are all the java keywords?");
        assert_eq!(quiz.answers(), &["abstract", "assert", "boolean"]);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body = r#"{"question": "Q?", "answer": ["a"], "id": 1}"#;
        let quiz = parse_quiz(body).unwrap();
        assert_eq!(quiz.answers().len(), 1);
    }

    #[test]
    fn test_missing_question() {
        let err = parse_quiz(r#"{"answer": ["a"]}"#).unwrap_err();
        assert!(matches!(err, FetchError::MissingField("question")));
        assert_eq!(err.kind(), FetchErrorKind::Decode);
    }

    #[test]
    fn test_null_answer() {
        let body = r#"{"question": "Q?", "answer": null}"#;
        let err = parse_quiz(body).unwrap_err();
        assert!(matches!(err, FetchError::MissingField("answer")));
    }

    #[test]
    fn test_empty_answer_list() {
        let body = r#"{"question": "Q?", "answer": []}"#;
        let err = parse_quiz(body).unwrap_err();
        assert!(matches!(err, FetchError::NoAnswers));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_quiz("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(err.kind(), FetchErrorKind::Decode);
    }

    #[test]
    fn test_wrong_types() {
        let body = r#"{"question": 1, "answer": ["a"]}"#;
        let err = parse_quiz(body).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
