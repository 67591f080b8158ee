//! View controller of the Mini App
//!
//! Fetches courses and topics, renders them into the [`Page`], and turns
//! file-button clicks into delivery requests. Every failure ends on the
//! page (notification or inline text); nothing is propagated to the caller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::sync::Mutex;

use super::host::{resolve_user_id, WebAppHost};
use super::messages;
use super::notification::schedule_hide;
use super::page::{Action, Page, TopicsPane, View};
use crate::api::{ApiError, CatalogApi, FileRequest};
use crate::core::config::ClientConfig;

pub struct ViewController {
    api: Arc<dyn CatalogApi>,
    host: Arc<dyn WebAppHost>,
    config: ClientConfig,
    page: Arc<Mutex<Page>>,
    /// Bumped by every view switch; responses carrying an older ticket must
    /// not repaint the topics view or switch views.
    view_generation: AtomicU64,
    /// Bumped by every `load_courses`; only the newest response paints.
    courses_generation: AtomicU64,
}

impl ViewController {
    pub fn new(api: Arc<dyn CatalogApi>, host: Arc<dyn WebAppHost>, config: ClientConfig) -> Self {
        Self {
            api,
            host,
            config,
            page: Arc::new(Mutex::new(Page::new())),
            view_generation: AtomicU64::new(0),
            courses_generation: AtomicU64::new(0),
        }
    }

    /// Shared handle to the page model
    pub fn page_handle(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }

    /// Snapshot of the current page
    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    fn next_ticket(&self) -> u64 {
        self.view_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.view_generation.load(Ordering::SeqCst) == ticket
    }

    /// Expands the host viewport and loads the course list.
    pub async fn start(&self) {
        self.host.expand();
        self.load_courses().await;
    }

    /// `GET /courses`, render the cards, switch to the courses view.
    ///
    /// The view only switches if nothing else switched it while the request
    /// was in flight, so a pending `load_topics` is not cancelled by a
    /// courses fetch that fails or arrives late.
    pub async fn load_courses(&self) {
        let request = self.courses_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let seen_view = self.view_generation.load(Ordering::SeqCst);
        log::info!("Loading courses");

        let result = self.api.courses().await;

        let mut page = self.page.lock().await;
        if self.courses_generation.load(Ordering::SeqCst) != request {
            log::debug!("Courses response #{} superseded, dropping", request);
            return;
        }

        match result {
            Ok(courses) => {
                log::info!("Loaded {} courses", courses.len());
                page.render_courses(&courses);
                let switched = self
                    .view_generation
                    .compare_exchange(seen_view, seen_view + 1, Ordering::SeqCst, Ordering::SeqCst)
                    .is_ok();
                if switched {
                    page.set_visible_view(View::Courses);
                } else {
                    log::debug!("View changed while courses were loading, keeping current view");
                }
            }
            Err(e) => {
                log::warn!("Failed to load courses: {}", e);
                drop(page);
                self.show_notification(messages::COURSES_LOAD_FAILED, true).await;
            }
        }
    }

    /// Shows the loading placeholder for `title`, then renders its topics.
    pub async fn load_topics(&self, course_id: i64, title: &str) {
        let ticket = self.next_ticket();
        {
            let mut page = self.page.lock().await;
            page.course_title = title.to_string();
            page.topics = TopicsPane::Loading;
            page.search.clear();
            page.set_visible_view(View::Topics);
        }
        log::info!("Loading topics for course {} ({})", course_id, title);

        let result = self.api.topics(course_id).await;

        let mut page = self.page.lock().await;
        if !self.is_current(ticket) {
            log::debug!("Topics response for course {} superseded, dropping", course_id);
            return;
        }

        match result {
            Ok(topics) => {
                log::info!("Loaded {} topics for course {}", topics.len(), course_id);
                page.render_topics(&topics);
            }
            Err(e) => {
                log::warn!("Failed to load topics for course {}: {}", course_id, e);
                page.topics = TopicsPane::Failed(messages::TOPICS_LOAD_FAILED.to_string());
            }
        }
    }

    /// Back to the course list without re-fetching.
    pub async fn show_courses(&self) {
        self.next_ticket();
        self.page.lock().await.set_visible_view(View::Courses);
    }

    /// Asks the backend to deliver `file_id` to the user's chat.
    pub async fn request_file(&self, file_id: &str) {
        let req = FileRequest {
            telegram_id: resolve_user_id(self.host.as_ref(), self.config.fallback_user_id),
            file_id: file_id.to_string(),
            webapp_token: self.config.webapp_token.expose_secret().to_string(),
        };
        log::info!("Requesting file {} for user {}", req.file_id, req.telegram_id);

        match self.api.request_file(&req, self.host.init_data()).await {
            Ok(_) => {
                self.show_notification(messages::FILE_SENT, false).await;
                self.host.notify_success();
            }
            Err(e @ ApiError::Status { .. }) => {
                log::warn!("File request {} rejected: {}", req.file_id, e);
                let detail = e.user_detail().unwrap_or_default();
                self.show_notification(&messages::request_failed(&detail), true).await;
            }
            Err(e) => {
                log::error!("File request {} failed: {}", req.file_id, e);
                self.show_notification(messages::NETWORK_ERROR, true).await;
            }
        }
    }

    /// Filters the rendered topics by `query`. Returns how many stay visible.
    pub async fn filter_topics(&self, query: &str) -> usize {
        self.page.lock().await.apply_filter(query)
    }

    /// Shows `msg` in the notification element and schedules its auto-hide.
    pub async fn show_notification(&self, msg: &str, is_error: bool) {
        let generation = self.page.lock().await.notification.show(msg, is_error);
        schedule_hide(self.page_handle(), generation, self.config.notification_timeout);
    }

    /// Runs the handler wired to a clicked element.
    pub async fn activate(&self, action: &Action) {
        match action {
            Action::OpenCourse { course_id, title } => self.load_topics(*course_id, title).await,
            Action::RequestFile { file_id } => self.request_file(file_id).await,
        }
    }
}
