//! Thin wrappers over the signup service's three REST endpoints.

use gloo::console;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use urlencoding::encode;

use crate::model::Activities;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct Accepted {
    message: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
struct Rejected {
    #[serde(default)]
    detail: Option<String>,
}

/// How a signup or removal attempt resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// 2xx; carries the server-supplied message text.
    Accepted(String),
    /// Non-2xx; carries the server's `detail`, or a generic fallback.
    Rejected(String),
    /// The request never completed (or the body was unreadable).
    Unreachable,
}

pub fn signup_url(activity: &str, email: &str) -> String {
    format!("/activities/{}/signup?email={}", encode(activity), encode(email))
}

pub fn removal_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}

pub async fn fetch_activities() -> Result<Activities, String> {
    let resp = Request::get("/activities")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<Activities>().await.map_err(|e| e.to_string())
}

pub async fn sign_up(activity: &str, email: &str) -> MutationOutcome {
    let sent = Request::post(&signup_url(activity, email)).send().await;
    outcome(sent, "An error occurred", "Error signing up:").await
}

pub async fn remove_participant(activity: &str, email: &str) -> MutationOutcome {
    let sent = Request::delete(&removal_url(activity, email)).send().await;
    outcome(sent, "Failed to remove participant", "Error removing participant:").await
}

async fn outcome(
    sent: Result<Response, gloo_net::Error>,
    rejected_fallback: &str,
    context: &'static str,
) -> MutationOutcome {
    let resp = match sent {
        Ok(resp) => resp,
        Err(e) => {
            console::error!(context, e.to_string());
            return MutationOutcome::Unreachable;
        }
    };

    if resp.ok() {
        match resp.json::<Accepted>().await {
            Ok(body) => MutationOutcome::Accepted(body.message),
            Err(e) => {
                console::error!(context, e.to_string());
                MutationOutcome::Unreachable
            }
        }
    } else {
        match resp.json::<Rejected>().await {
            Ok(body) => MutationOutcome::Rejected(
                body.detail
                    .unwrap_or_else(|| rejected_fallback.to_string()),
            ),
            Err(e) => {
                console::error!(context, e.to_string());
                MutationOutcome::Unreachable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_url_percent_encodes_name_and_email() {
        assert_eq!(
            signup_url("Chess Club", "new student@mergington.edu"),
            "/activities/Chess%20Club/signup?email=new%20student%40mergington.edu"
        );
    }

    #[test]
    fn removal_url_percent_encodes_reserved_characters() {
        assert_eq!(
            removal_url("A/V Club & Friends", "a+b@x.com"),
            "/activities/A%2FV%20Club%20%26%20Friends/participants?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn rejected_body_reads_detail() {
        let body: Rejected = serde_json::from_str(r#"{"detail":"Already signed up"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Already signed up"));
    }

    #[test]
    fn rejected_body_tolerates_missing_detail() {
        let body: Rejected = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }

    #[test]
    fn accepted_body_reads_message() {
        let body: Accepted =
            serde_json::from_str(r#"{"message":"Signed up a@x.com for Chess Club"}"#).unwrap();
        assert_eq!(body.message, "Signed up a@x.com for Chess Club");
    }
}
