//! Scripted [`CatalogApi`] for controller tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::oneshot;

use course_miniapp::api::{ApiError, CatalogApi, Course, FileRequest, StatusResponse, Topic};

/// Scripted outcome of one call
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// Non-2xx status with an optional backend detail
    Status(u16, Option<String>),
    /// Undecodable body; the controller treats it like a transport failure
    Broken,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(code, detail) => Err(ApiError::Status {
                status: StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                detail: detail.clone(),
            }),
            Reply::Broken => Err(ApiError::Decode("expected value at line 1 column 1".to_string())),
        }
    }
}

pub struct MockCatalogApi {
    courses: Mutex<Reply<Vec<Course>>>,
    topics: Mutex<HashMap<i64, Reply<Vec<Topic>>>>,
    file_reply: Mutex<Reply<StatusResponse>>,
    courses_gate: Mutex<Option<oneshot::Receiver<()>>>,
    queued_courses: Mutex<VecDeque<(oneshot::Receiver<()>, Reply<Vec<Course>>)>>,
    topic_gates: Mutex<HashMap<i64, oneshot::Receiver<()>>>,
    course_calls: Mutex<usize>,
    topic_calls: Mutex<Vec<i64>>,
    file_requests: Mutex<Vec<(FileRequest, Option<String>)>>,
}

impl Default for MockCatalogApi {
    fn default() -> Self {
        Self {
            courses: Mutex::new(Reply::Ok(Vec::new())),
            topics: Mutex::new(HashMap::new()),
            file_reply: Mutex::new(Reply::Ok(StatusResponse::default())),
            courses_gate: Mutex::new(None),
            queued_courses: Mutex::new(VecDeque::new()),
            topic_gates: Mutex::new(HashMap::new()),
            course_calls: Mutex::new(0),
            topic_calls: Mutex::new(Vec::new()),
            file_requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(self, reply: Reply<Vec<Course>>) -> Self {
        *self.courses.lock().unwrap() = reply;
        self
    }

    pub fn with_topics(self, course_id: i64, reply: Reply<Vec<Topic>>) -> Self {
        self.topics.lock().unwrap().insert(course_id, reply);
        self
    }

    pub fn with_file_reply(self, reply: Reply<StatusResponse>) -> Self {
        *self.file_reply.lock().unwrap() = reply;
        self
    }

    /// Holds the next `courses()` call until the returned sender fires
    pub fn gate_courses(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.courses_gate.lock().unwrap() = Some(rx);
        tx
    }

    /// Scripts one `courses()` call: calls consume queued replies in order,
    /// each held until its own sender fires
    pub fn queue_courses(&self, reply: Reply<Vec<Course>>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.queued_courses.lock().unwrap().push_back((rx, reply));
        tx
    }

    /// Holds the next `topics(course_id)` call until the returned sender fires
    pub fn gate_topics(&self, course_id: i64) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.topic_gates.lock().unwrap().insert(course_id, rx);
        tx
    }

    pub fn course_calls(&self) -> usize {
        *self.course_calls.lock().unwrap()
    }

    pub fn topic_calls(&self) -> Vec<i64> {
        self.topic_calls.lock().unwrap().clone()
    }

    pub fn file_requests(&self) -> Vec<(FileRequest, Option<String>)> {
        self.file_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        *self.course_calls.lock().unwrap() += 1;
        let queued = self.queued_courses.lock().unwrap().pop_front();
        if let Some((gate, reply)) = queued {
            let _ = gate.await;
            return reply.to_result();
        }
        let gate = self.courses_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.courses.lock().unwrap().to_result()
    }

    async fn topics(&self, course_id: i64) -> Result<Vec<Topic>, ApiError> {
        self.topic_calls.lock().unwrap().push(course_id);
        let gate = self.topic_gates.lock().unwrap().remove(&course_id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.topics
            .lock()
            .unwrap()
            .get(&course_id)
            .cloned()
            .unwrap_or(Reply::Status(404, Some("Course not found or empty".to_string())))
            .to_result()
    }

    async fn request_file(&self, req: &FileRequest, init_data: Option<&str>) -> Result<StatusResponse, ApiError> {
        self.file_requests
            .lock()
            .unwrap()
            .push((req.clone(), init_data.map(str::to_string)));
        self.file_reply.lock().unwrap().to_result()
    }
}
