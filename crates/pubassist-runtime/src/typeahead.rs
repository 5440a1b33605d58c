//! Debounced search-as-you-type.
//!
//! Each keystroke cancels the pending lookup and schedules a new one
//! after the debounce delay. Responses are tagged with the generation of
//! the input that triggered them, and anything older than the latest
//! input is dropped on arrival.

use crate::status::RequestStatus;
use crate::Result;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

enum Message<T> {
    Started { generation: u64 },
    Finished { generation: u64, result: Result<Vec<T>> },
}

pub struct Typeahead<T> {
    delay: Duration,
    generation: u64,
    awaiting: bool,
    pending: Option<JoinHandle<()>>,
    sender: mpsc::UnboundedSender<Message<T>>,
    receiver: mpsc::UnboundedReceiver<Message<T>>,
    query: String,
    results: Option<Vec<T>>,
    status: RequestStatus,
}

impl<T: Send + 'static> Typeahead<T> {
    pub fn new(delay: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            delay,
            generation: 0,
            awaiting: false,
            pending: None,
            sender,
            receiver,
            query: String::new(),
            results: None,
            status: RequestStatus::default(),
        }
    }

    /// Latest input text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the latest completed lookup; `None` when cleared.
    pub fn results(&self) -> Option<&[T]> {
        self.results.as_deref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Register new input. Empty text clears the results without a lookup.
    pub fn on_input<F, Fut>(&mut self, text: impl Into<String>, fetch: F)
    where
        F: FnOnce(String) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
        self.query = text.into();

        if self.query.is_empty() {
            self.awaiting = false;
            self.results = None;
            self.status.reset();
            return;
        }

        let generation = self.generation;
        let sender = self.sender.clone();
        let delay = self.delay;
        let text = self.query.clone();

        self.awaiting = true;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(Message::Started { generation });
            let result = fetch(text).await;
            let _ = sender.send(Message::Finished { generation, result });
        }));
    }

    /// Wait for the lookup of the latest input.
    ///
    /// Returns `None` when no lookup is outstanding. On failure the error
    /// flag is set and the previous results are cleared.
    pub async fn next_update(&mut self) -> Option<Result<&[T]>> {
        if !self.awaiting {
            return None;
        }

        while let Some(message) = self.receiver.recv().await {
            match message {
                Message::Started { generation } if generation == self.generation => {
                    self.status.begin();
                    self.results = None;
                }
                Message::Finished { generation, result } if generation == self.generation => {
                    self.awaiting = false;
                    self.pending = None;
                    return Some(match result {
                        Ok(results) => {
                            self.status.succeed();
                            Ok(self.results.insert(results).as_slice())
                        }
                        Err(err) => {
                            self.status.fail();
                            self.results = None;
                            Err(err)
                        }
                    });
                }
                Message::Started { generation } | Message::Finished { generation, .. } => {
                    tracing::trace!(generation, latest = self.generation, "dropping stale lookup");
                }
            }
        }

        None
    }
}

impl<T> Drop for Typeahead<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
