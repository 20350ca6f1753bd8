use std::time::Instant;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Local;
use tracing::info;

const LEGACY_PREFIX: &str = "/tasks/";
const CURRENT_PREFIX: &str = "/todos/";

/// Logs a line when a request starts and another when it finishes.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    info!(%method, %path, at = %Local::now(), "Started.");

    let response = next.run(req).await;

    info!(
        %method,
        %path,
        at = %Local::now(),
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "Finished."
    );

    response
}

/// Redirects requests under the old `/tasks/` prefix to `/todos/`. The
/// prefix matches in any ASCII case; the rest of the path is kept as sent.
pub async fn redirect_legacy_tasks(req: Request, next: Next) -> Response {
    let Some(location) = legacy_location(req.uri().path(), req.uri().query()) else {
        return next.run(req).await;
    };

    info!(from = %req.uri(), to = %location, "redirecting legacy path");

    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

fn legacy_location(path: &str, query: Option<&str>) -> Option<String> {
    let prefix = path.get(..LEGACY_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(LEGACY_PREFIX) {
        return None;
    }
    let rest = &path[LEGACY_PREFIX.len()..];
    let mut location = format!("{CURRENT_PREFIX}{rest}");

    if let Some(query) = query {
        location.push('?');
        location.push_str(query);
    }

    Some(location)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/tasks/5", None, Some("/todos/5"))]
    #[case("/tasks/", None, Some("/todos/"))]
    #[case("/tasks/5/extra", None, Some("/todos/5/extra"))]
    #[case("/tasks/5", Some("verbose=1"), Some("/todos/5?verbose=1"))]
    #[case("/Tasks/5", None, Some("/todos/5"))]
    #[case("/TASKS/Abc", None, Some("/todos/Abc"))]
    #[case("/täsks/5", None, None)]
    #[case("/tasks", None, None)]
    #[case("/todos/5", None, None)]
    #[case("/api/tasks/5", None, None)]
    fn rewrites_only_legacy_paths(
        #[case] path: &str,
        #[case] query: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(legacy_location(path, query).as_deref(), expected);
    }
}
