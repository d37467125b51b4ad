//! Scripted `ResourceClient` for exercising list views without a server.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use gavel::api::{ListPayload, ListQuery, Record, ResourceClient, ResourceSpec};
use gavel::{ApiError, GavelError, ProfileUpdate, Result, Session};

/// One scripted answer
pub enum Reply<T> {
    Ok(T),
    Err(ApiError),
    /// Answer after sleeping, for timeout tests
    Delayed(Duration, T),
}

/// A request the client received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List {
        resource: &'static str,
        query: ListQuery,
    },
    UpdateStatus {
        resource: &'static str,
        id: String,
        status: String,
    },
    MarkRead {
        resource: &'static str,
        id: String,
    },
    UpdateProfile {
        email: String,
    },
}

/// Answers requests from queues filled by the test, in order.
///
/// An empty queue answers with a transport error, so an unexpected request
/// fails loudly.
#[derive(Default)]
pub struct ScriptedClient {
    lists: Mutex<VecDeque<Reply<ListPayload>>>,
    updates: Mutex<VecDeque<Reply<Option<Record>>>>,
    reads: Mutex<VecDeque<Reply<Option<Record>>>>,
    profiles: Mutex<VecDeque<Reply<Record>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, reply: Reply<ListPayload>) -> Self {
        self.lists.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_update(self, reply: Reply<Option<Record>>) -> Self {
        self.updates.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_read(self, reply: Reply<Option<Record>>) -> Self {
        self.reads.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_profile(self, reply: Reply<Record>) -> Self {
        self.profiles.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::UpdateStatus { .. }))
            .count()
    }

    pub fn read_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::MarkRead { id, .. } => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

async fn answer<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Result<T> {
    let reply = queue.lock().unwrap().pop_front();
    match reply {
        Some(Reply::Ok(value)) => Ok(value),
        Some(Reply::Err(err)) => Err(err.into()),
        Some(Reply::Delayed(delay, value)) => {
            tokio::time::sleep(delay).await;
            Ok(value)
        }
        None => Err(GavelError::Api(ApiError::transport(
            "scripted://client",
            "no scripted reply",
        ))),
    }
}

impl ResourceClient for ScriptedClient {
    async fn fetch_list(
        &self,
        spec: &'static ResourceSpec,
        query: ListQuery,
        session: &Session,
    ) -> Result<ListPayload> {
        // Same path resolution as the HTTP client
        spec.list_path(session)?;
        self.record(Call::List {
            resource: spec.name,
            query,
        });
        answer(&self.lists).await
    }

    async fn update_status(
        &self,
        spec: &'static ResourceSpec,
        id: &str,
        status: &str,
        _session: &Session,
    ) -> Result<Option<Record>> {
        self.record(Call::UpdateStatus {
            resource: spec.name,
            id: id.to_string(),
            status: status.to_string(),
        });
        answer(&self.updates).await
    }

    async fn mark_read(
        &self,
        spec: &'static ResourceSpec,
        id: &str,
        _session: &Session,
    ) -> Result<Option<Record>> {
        self.record(Call::MarkRead {
            resource: spec.name,
            id: id.to_string(),
        });
        answer(&self.reads).await
    }

    async fn update_profile(
        &self,
        email: &str,
        _changes: &ProfileUpdate,
        _session: &Session,
    ) -> Result<Record> {
        self.record(Call::UpdateProfile {
            email: email.to_string(),
        });
        answer(&self.profiles).await
    }
}
