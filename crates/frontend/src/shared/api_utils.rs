//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and surfacing errors.

use contracts::domain::a001_order::error::OrderError;

/// Get the base URL for API requests
///
/// The panel is served by the same backend that exposes `/api/...`,
/// so the base is the origin of the current page.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available (relative URLs are used)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/pedidos");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Блокирующее сообщение пользователю (window.alert)
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Логирует ошибку запроса и показывает общее сообщение.
/// Ошибки валидации только показываются: запрос не отправлялся.
pub fn report_error(context: &str, error: &OrderError) {
    if !error.is_validation() {
        log::error!("{}: {}", context, error);
    }
    alert(&error.to_string());
}

/// Подтверждение действия (window.confirm)
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
