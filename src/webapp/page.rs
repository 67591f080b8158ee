//! Headless page model
//!
//! Stand-in for the Mini App DOM: the two view containers, the course title
//! label, the search input and the notification element. Renderers write
//! into it; a host embedding (or a test) reads it back to paint or assert.

use std::collections::HashMap;

use strum::{Display, EnumIter, IntoEnumIterator};

use super::messages;
use super::notification::Notification;
use crate::api::{Course, Topic};

/// Mutually exclusive views of the Mini App
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    Courses,
    Topics,
}

/// What a click on a rendered element does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenCourse { course_id: i64, title: String },
    RequestFile { file_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub title: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileButton {
    pub label: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilesArea {
    NoFiles,
    Buttons(Vec<FileButton>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicItem {
    pub title: String,
    pub files: FilesArea,
    pub visible: bool,
}

/// Content of the topics container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicsPane {
    Loading,
    Empty,
    Failed(String),
    Items(Vec<TopicItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Visibility of each view container, keyed by view
    views: HashMap<View, bool>,
    pub courses: Vec<CourseCard>,
    pub course_title: String,
    pub topics: TopicsPane,
    pub search: String,
    pub notification: Notification,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Empty page showing the courses view
    pub fn new() -> Self {
        let mut page = Self {
            views: View::iter().map(|v| (v, false)).collect(),
            courses: Vec::new(),
            course_title: String::new(),
            topics: TopicsPane::Empty,
            search: String::new(),
            notification: Notification::default(),
        };
        page.set_visible_view(View::Courses);
        page
    }

    /// Hides every view container, then shows `view`.
    pub fn set_visible_view(&mut self, view: View) {
        for visible in self.views.values_mut() {
            *visible = false;
        }
        self.views.insert(view, true);
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.views.get(&view).copied().unwrap_or(false)
    }

    /// The single visible view
    pub fn visible_view(&self) -> View {
        View::iter().find(|v| self.is_visible(*v)).unwrap_or(View::Courses)
    }

    /// Replaces the course container with one card per course.
    pub fn render_courses(&mut self, courses: &[Course]) {
        self.courses = courses
            .iter()
            .map(|course| CourseCard {
                title: course.title.clone(),
                action: Action::OpenCourse {
                    course_id: course.id,
                    title: course.title.clone(),
                },
            })
            .collect();
    }

    /// Replaces the topics container with the topic items (or the empty placeholder).
    pub fn render_topics(&mut self, topics: &[Topic]) {
        if topics.is_empty() {
            self.topics = TopicsPane::Empty;
            return;
        }

        let items = topics
            .iter()
            .map(|topic| {
                let files = if topic.files.is_empty() {
                    FilesArea::NoFiles
                } else {
                    FilesArea::Buttons(
                        topic
                            .files
                            .iter()
                            .map(|file| FileButton {
                                label: messages::download_label(&file.name),
                                action: Action::RequestFile {
                                    file_id: file.file_id.clone(),
                                },
                            })
                            .collect(),
                    )
                };
                TopicItem {
                    title: topic.title.clone(),
                    files,
                    visible: true,
                }
            })
            .collect();
        self.topics = TopicsPane::Items(items);
    }

    /// Case-insensitive substring filter over rendered topic titles.
    /// Returns the number of items left visible.
    pub fn apply_filter(&mut self, query: &str) -> usize {
        self.search = query.to_string();
        let needle = query.to_lowercase();

        match &mut self.topics {
            TopicsPane::Items(items) => {
                for item in items.iter_mut() {
                    item.visible = item.title.to_lowercase().contains(&needle);
                }
                items.iter().filter(|i| i.visible).count()
            }
            _ => 0,
        }
    }

    /// Titles of topic items currently shown
    pub fn visible_topic_titles(&self) -> Vec<&str> {
        match &self.topics {
            TopicsPane::Items(items) => items.iter().filter(|i| i.visible).map(|i| i.title.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Actions of every clickable element in the course container
    pub fn course_actions(&self) -> Vec<Action> {
        self.courses.iter().map(|c| c.action.clone()).collect()
    }

    /// Actions of every file button in the topics container
    pub fn file_actions(&self) -> Vec<Action> {
        match &self.topics {
            TopicsPane::Items(items) => items
                .iter()
                .flat_map(|item| match &item.files {
                    FilesArea::Buttons(buttons) => buttons.iter().map(|b| b.action.clone()).collect(),
                    FilesArea::NoFiles => Vec::new(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Plain text a user would see in the container of `view`.
    pub fn text_content(&self, view: View) -> String {
        match view {
            View::Courses => self
                .courses
                .iter()
                .map(|c| c.title.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            View::Topics => {
                let body = match &self.topics {
                    TopicsPane::Loading => messages::TOPICS_LOADING.to_string(),
                    TopicsPane::Empty => messages::TOPICS_EMPTY.to_string(),
                    TopicsPane::Failed(text) => text.clone(),
                    TopicsPane::Items(items) => items
                        .iter()
                        .filter(|i| i.visible)
                        .map(|item| {
                            let files = match &item.files {
                                FilesArea::NoFiles => format!("  {}", messages::NO_FILES),
                                FilesArea::Buttons(buttons) => buttons
                                    .iter()
                                    .map(|b| format!("  [{}]", b.label))
                                    .collect::<Vec<_>>()
                                    .join("\n"),
                            };
                            format!("{}\n{}", item.title, files)
                        })
                        .collect::<Vec<_>>()
                        .join("\n"),
                };
                format!("{}\n{}", self.course_title, body)
            }
        }
    }
}
