//! Mock implementations of the backend API and the WebApp host
//!
//! Lets the view controller run without a network or a Telegram client.

#![allow(dead_code)] // Not every test binary uses every helper

pub mod mock_api;
pub mod mock_host;

pub use mock_api::{MockCatalogApi, Reply};
pub use mock_host::MockHost;

use course_miniapp::api::{Course, FileMeta, Topic};

pub fn course(id: i64, title: &str) -> Course {
    Course {
        id,
        title: title.to_string(),
    }
}

pub fn topic(title: &str, files: &[(&str, &str)]) -> Topic {
    Topic {
        title: title.to_string(),
        files: files
            .iter()
            .map(|(file_id, name)| FileMeta {
                file_id: file_id.to_string(),
                name: name.to_string(),
                kind: None,
            })
            .collect(),
        course: None,
    }
}
