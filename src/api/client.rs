use crate::api::decode::parse_quiz;
use crate::config::Config;
use crate::error::FetchError;
use crate::logger;
use crate::models::Quiz;
use async_trait::async_trait;
use reqwest::Client;

/// Anything that can produce a quiz for a new session.
#[async_trait]
pub trait QuizSource: Send + Sync {
    async fn fetch_quiz(&self) -> Result<Quiz, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpQuizSource {
    client: Client,
    endpoint: String,
}

impl HttpQuizSource {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl QuizSource for HttpQuizSource {
    async fn fetch_quiz(&self) -> Result<Quiz, FetchError> {
        logger::log(&format!("GET {}", self.endpoint));
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = response.text().await?;
        let quiz = parse_quiz(&body)?;
        logger::log(&format!(
            "Received quiz with {} answers",
            quiz.answers().len()
        ));
        Ok(quiz)
    }
}

/// Source that replays canned results in order, for tests.
#[cfg(test)]
pub struct MockQuizSource {
    results: std::sync::Mutex<std::collections::VecDeque<Result<Quiz, FetchError>>>,
}

#[cfg(test)]
impl MockQuizSource {
    pub fn new(results: Vec<Result<Quiz, FetchError>>) -> Self {
        Self {
            results: std::sync::Mutex::new(results.into()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl QuizSource for MockQuizSource {
    async fn fetch_quiz(&self) -> Result<Quiz, FetchError> {
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::WorkerUnavailable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one HTTP response on a local port and return the endpoint URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/quiz/1", addr)
    }

    fn source_for(endpoint: String) -> HttpQuizSource {
        let config = Config {
            endpoint,
            ..Config::default()
        };
        HttpQuizSource::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_quiz_success() {
        let endpoint = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"question":"What are all the java keywords?","answer":["abstract","assert"]}"#,
        );
        let source = source_for(endpoint);
        let quiz = source.fetch_quiz().await.unwrap();
        assert_eq!(quiz.question(), "What are all the java keywords?");
        assert_eq!(quiz.answers().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_quiz_http_error_status() {
        let endpoint = serve_once("HTTP/1.1 500 Internal Server Error", "{}");
        let source = source_for(endpoint);
        let err = source.fetch_quiz().await.unwrap_err();
        let FetchError::HttpStatus(status) = &err else {
            panic!("expected an HTTP status error, got {:?}", err);
        };
        assert_eq!(status.as_u16(), 500);
        assert_eq!(err.kind(), FetchErrorKind::Network);
    }

    #[tokio::test]
    async fn test_fetch_quiz_missing_fields() {
        let endpoint = serve_once("HTTP/1.1 200 OK", r#"{"question":null}"#);
        let source = source_for(endpoint);
        let err = source.fetch_quiz().await.unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_fetch_quiz_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = source_for(format!("http://{}/quiz/1", addr));
        let err = source.fetch_quiz().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_mock_source_replays_in_order() {
        let quiz = Quiz::new("Q?", vec!["a".to_string()]).unwrap();
        let source = MockQuizSource::new(vec![Err(FetchError::NoAnswers), Ok(quiz.clone())]);
        assert!(source.fetch_quiz().await.is_err());
        assert_eq!(source.fetch_quiz().await.unwrap(), quiz);
        assert!(matches!(
            source.fetch_quiz().await,
            Err(FetchError::WorkerUnavailable)
        ));
    }
}
