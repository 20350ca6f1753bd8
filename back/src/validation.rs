use std::{collections::BTreeMap, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use todos_api::v1::{Todo, ValidationProblem};

use crate::{error::ApiError, AppState};

/// Field name reported when the due date is rejected.
pub const DUE_DATE_FIELD: &str = "DueDate";

/// Which side of "now" a new todo's due date has to be on.
///
/// `MustBePast` is the long-standing behavior of the service and stays the
/// default even though it reads backwards for a todo list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DueDateRule {
    #[default]
    #[value(name = "past")]
    MustBePast,
    #[value(name = "future")]
    MustBeFuture,
}

impl DueDateRule {
    /// Message for a due date that breaks the rule, `None` when it is accepted.
    pub fn check(self, due_date: DateTime<Utc>, now: DateTime<Utc>) -> Option<&'static str> {
        match self {
            Self::MustBePast if due_date > now => Some("Due date must be in the past"),
            Self::MustBeFuture if due_date < now => Some("Due date must be in the future"),
            _ => None,
        }
    }
}

pub fn validate_todo(
    todo: &Todo,
    rule: DueDateRule,
    now: DateTime<Utc>,
) -> Result<(), ValidationProblem> {
    let mut errors = BTreeMap::new();

    if let Some(message) = rule.check(todo.due_date, now) {
        errors.insert(String::from(DUE_DATE_FIELD), vec![String::from(message)]);
    }

    let problem = ValidationProblem::new(errors);
    if problem.is_empty() {
        Ok(())
    } else {
        Err(problem)
    }
}

/// JSON body extractor that only yields todos passing the configured rule.
#[derive(Debug)]
pub struct ValidTodo(pub Todo);

#[async_trait]
impl FromRequest<Arc<AppState>> for ValidTodo {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let Json(todo) = Json::<Todo>::from_request(req, state).await?;

        validate_todo(&todo, state.due_date_rule, state.clock.now())?;

        Ok(Self(todo))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[rstest]
    #[case::past_rule_future_date(DueDateRule::MustBePast, 1, Some("Due date must be in the past"))]
    #[case::past_rule_past_date(DueDateRule::MustBePast, -1, None)]
    #[case::past_rule_now(DueDateRule::MustBePast, 0, None)]
    #[case::future_rule_past_date(DueDateRule::MustBeFuture, -1, Some("Due date must be in the future"))]
    #[case::future_rule_future_date(DueDateRule::MustBeFuture, 1, None)]
    #[case::future_rule_now(DueDateRule::MustBeFuture, 0, None)]
    fn check_due_date(
        #[case] rule: DueDateRule,
        #[case] offset_days: i64,
        #[case] expected: Option<&'static str>,
    ) {
        let due_date = now() + Duration::days(offset_days);

        assert_eq!(rule.check(due_date, now()), expected);
    }

    #[test]
    fn default_rule_rejects_future_dates() {
        assert_eq!(DueDateRule::default(), DueDateRule::MustBePast);
    }

    #[test]
    fn validate_todo_reports_due_date_field() {
        let todo = Todo::new(1, "tomorrow", now() + Duration::days(1));

        let problem = validate_todo(&todo, DueDateRule::MustBePast, now()).unwrap_err();

        assert_eq!(problem.status, 400);
        assert_eq!(
            problem.errors.get(DUE_DATE_FIELD),
            Some(&vec![String::from("Due date must be in the past")])
        );
    }

    #[test]
    fn validate_todo_accepts_valid_todo() {
        let todo = Todo::new(1, "yesterday", now() - Duration::days(1));

        assert_eq!(validate_todo(&todo, DueDateRule::MustBePast, now()), Ok(()));
    }
}
