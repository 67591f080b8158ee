//! User-facing texts of the Mini App

pub const COURSES_LOAD_FAILED: &str = "Ошибка загрузки курсов";
pub const TOPICS_LOADING: &str = "Загрузка...";
pub const TOPICS_EMPTY: &str = "Нет тем в этом курсе";
pub const TOPICS_LOAD_FAILED: &str = "Ошибка загрузки тем";
pub const NO_FILES: &str = "Нет файлов";
pub const FILE_SENT: &str = "✅ Файл отправлен в чат!";
pub const NETWORK_ERROR: &str = "❌ Ошибка сети";

/// Label of a file download button
pub fn download_label(name: &str) -> String {
    format!("Скачать {}", name)
}

/// Notification for a rejected file request
pub fn request_failed(detail: &str) -> String {
    format!("❌ Ошибка: {}", detail)
}
