use axum::http::StatusCode;

pub type ApiResult<T> = Result<T, (StatusCode, String)>;

pub fn conflict(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::CONFLICT, msg.into())
}
