//! Webhook event data structures
//!
//! Wire shapes for the GitHub payloads this service consumes, and the
//! normalized `TemplateData` snapshot handed to the template engine.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Webhook event families this service renders messages for.
pub const SUPPORTED_EVENTS: [&str; 3] = [
    "pull_request",
    "pull_request_review",
    "pull_request_review_comment",
];

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub login: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    pub full_name: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub head: String,
    pub base: String,
    pub merged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub state: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub body: String,
    pub path: String,
}

/// Normalized snapshot of one webhook delivery.
///
/// Built once per delivery and treated as read-only for the duration of
/// the render. Field names here are the paths template authors use,
/// e.g. `{{ pr.number }}` or `{{ actor.login }}`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    pub event_name: String,
    pub action: String,
    pub actor: User,
    pub repo: Repository,
    pub pr: PullRequest,
    pub review: Option<Review>,
    pub comment: Option<Comment>,
}

impl TemplateData {
    /// True only for a pull request close action where GitHub reports
    /// the PR as merged. GitHub never sends a literal "merged" action;
    /// this predicate is the only path to the merged template.
    pub fn is_merged(&self) -> bool {
        self.event_name == "pull_request" && self.action == "closed" && self.pr.merged
    }

    /// Parse a raw GitHub webhook body into a normalized snapshot.
    ///
    /// Review events arrive with action "submitted"; the review state
    /// ("approved", "changes_requested", "commented") is what selects
    /// the template, so it replaces the literal action here.
    pub fn from_webhook(event_name: &str, body: &[u8]) -> Result<Self> {
        let wire: WireEvent = serde_json::from_slice(body)?;

        let action = if event_name == "pull_request_review" && wire.action == "submitted" {
            wire.review
                .as_ref()
                .map(|r| r.state.clone())
                .unwrap_or(wire.action)
        } else {
            wire.action
        };

        Ok(Self {
            event_name: event_name.to_string(),
            action,
            actor: User {
                login: wire.sender.login,
                html_url: wire.sender.html_url,
            },
            repo: Repository {
                full_name: wire.repository.full_name,
                html_url: wire.repository.html_url,
            },
            pr: PullRequest {
                number: wire.pull_request.number,
                title: wire.pull_request.title,
                html_url: wire.pull_request.html_url,
                head: wire.pull_request.head.ref_name,
                base: wire.pull_request.base.ref_name,
                merged: wire.pull_request.merged,
            },
            review: wire.review.map(|r| Review {
                state: r.state,
                body: r.body.unwrap_or_default(),
            }),
            comment: wire.comment.map(|c| Comment {
                body: c.body,
                path: c.path,
            }),
        })
    }
}

/// Shared wire layout of the three pull-request-family payloads.
/// Review and comment objects are present only on their own events.
#[derive(Debug, Deserialize)]
struct WireEvent {
    action: String,
    pull_request: WirePullRequest,
    repository: WireRepository,
    sender: WireUser,
    #[serde(default)]
    review: Option<WireReview>,
    #[serde(default)]
    comment: Option<WireComment>,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    login: String,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct WireRepository {
    full_name: String,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct WireBranch {
    #[serde(rename = "ref")]
    ref_name: String,
}

#[derive(Debug, Deserialize)]
struct WirePullRequest {
    number: u64,
    title: String,
    html_url: String,
    head: WireBranch,
    base: WireBranch,
    // Absent on some payloads, null until close on others
    #[serde(default)]
    merged: bool,
}

#[derive(Debug, Deserialize)]
struct WireReview {
    state: String,
    // Null when the reviewer left no summary text
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireComment {
    body: String,
    path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pr_payload(action: &str) -> serde_json::Value {
        json!({
            "action": action,
            "number": 42,
            "pull_request": {
                "number": 42,
                "title": "Add new feature",
                "html_url": "https://github.com/octocat/Hello-World/pull/42",
                "head": { "ref": "feature-branch" },
                "base": { "ref": "main" },
                "merged": false
            },
            "repository": {
                "full_name": "octocat/Hello-World",
                "html_url": "https://github.com/octocat/Hello-World"
            },
            "sender": {
                "login": "octocat",
                "html_url": "https://github.com/octocat"
            }
        })
    }

    #[test]
    fn parses_pull_request_opened() {
        let body = pr_payload("opened").to_string();
        let data = TemplateData::from_webhook("pull_request", body.as_bytes()).unwrap();

        assert_eq!(data.event_name, "pull_request");
        assert_eq!(data.action, "opened");
        assert_eq!(data.actor.login, "octocat");
        assert_eq!(data.repo.full_name, "octocat/Hello-World");
        assert_eq!(data.pr.number, 42);
        assert_eq!(data.pr.head, "feature-branch");
        assert_eq!(data.pr.base, "main");
        assert!(data.review.is_none());
        assert!(data.comment.is_none());
    }

    #[test]
    fn review_submitted_action_becomes_review_state() {
        let mut payload = pr_payload("submitted");
        payload["review"] = json!({ "state": "approved", "body": "LGTM!" });
        let body = payload.to_string();

        let data = TemplateData::from_webhook("pull_request_review", body.as_bytes()).unwrap();

        assert_eq!(data.action, "approved");
        let review = data.review.unwrap();
        assert_eq!(review.state, "approved");
        assert_eq!(review.body, "LGTM!");
    }

    #[test]
    fn null_review_body_becomes_empty_string() {
        let mut payload = pr_payload("submitted");
        payload["review"] = json!({ "state": "approved", "body": null });
        let body = payload.to_string();

        let data = TemplateData::from_webhook("pull_request_review", body.as_bytes()).unwrap();

        assert_eq!(data.review.unwrap().body, "");
    }

    #[test]
    fn parses_review_comment_created() {
        let mut payload = pr_payload("created");
        payload["comment"] = json!({ "body": "This needs a fix", "path": "src/main.rs" });
        let body = payload.to_string();

        let data =
            TemplateData::from_webhook("pull_request_review_comment", body.as_bytes()).unwrap();

        let comment = data.comment.unwrap();
        assert_eq!(comment.body, "This needs a fix");
        assert_eq!(comment.path, "src/main.rs");
    }

    #[test]
    fn is_merged_requires_closed_action_and_merged_flag() {
        let mut payload = pr_payload("closed");
        payload["pull_request"]["merged"] = json!(true);
        let body = payload.to_string();

        let data = TemplateData::from_webhook("pull_request", body.as_bytes()).unwrap();
        assert!(data.is_merged());

        // merged flag without a close action is not a merge
        let mut payload = pr_payload("opened");
        payload["pull_request"]["merged"] = json!(true);
        let body = payload.to_string();

        let data = TemplateData::from_webhook("pull_request", body.as_bytes()).unwrap();
        assert!(!data.is_merged());

        // close without the merged flag is a plain close
        let body = pr_payload("closed").to_string();
        let data = TemplateData::from_webhook("pull_request", body.as_bytes()).unwrap();
        assert!(!data.is_merged());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(TemplateData::from_webhook("pull_request", b"not json").is_err());

        // missing required pull_request object
        let body = json!({ "action": "opened" }).to_string();
        assert!(TemplateData::from_webhook("pull_request", body.as_bytes()).is_err());
    }
}
