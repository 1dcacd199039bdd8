use crate::api::QuizSource;
use crate::logger;
use crate::models::{FetchRequest, FetchResponse};
use crossbeam_channel::{Receiver, Sender};
use std::io;
use std::sync::Arc;
use std::thread;

/// Run quiz fetches off the UI thread. The worker exits once `requests` disconnects.
pub fn spawn_fetch_worker(
    source: Arc<dyn QuizSource>,
    responses: Sender<FetchResponse>,
    requests: Receiver<FetchRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("keyword-quiz::fetch_worker".to_string())
        .spawn(move || {
            for request in requests.iter() {
                let FetchRequest::Fetch { request_id } = request;
                logger::log(&format!("Worker received fetch request {}", request_id));

                let response = match runtime.block_on(source.fetch_quiz()) {
                    Ok(quiz) => FetchResponse::Loaded { request_id, quiz },
                    Err(error) => {
                        logger::log(&format!("Worker error: {}", error));
                        FetchResponse::Failed { request_id, error }
                    }
                };

                if responses.send(response).is_err() {
                    break;
                }
            }
            logger::log("Worker channel disconnected, exiting");
        })
}
