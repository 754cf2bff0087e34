//! Built-in message templates
//!
//! Process-wide read-only table keyed by `event_name:action`. Populated
//! once on first use and never mutated afterward, so concurrent lookups
//! need no synchronization. Output is Telegram HTML; interpolated
//! values are escaped by the renderer, literal markup here is not.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Selection key for the merged override. GitHub never sends a literal
/// "merged" action; this entry is reachable only through
/// `TemplateData::is_merged`.
pub const MERGED_KEY: &str = "pull_request:merged";

const PR_OPENED: &str = r#"🔔 <b>New Pull Request</b> <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
<code>{{ pr.head }}</code> → <code>{{ pr.base }}</code>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>"#;

const PR_CLOSED: &str = r#"❌ <b>Pull Request Closed</b> <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
closed by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>"#;

const PR_MERGED: &str = r#"🎉 <b>Pull Request Merged</b> <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
<code>{{ pr.head }}</code> → <code>{{ pr.base }}</code>
merged by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>"#;

const PR_REOPENED: &str = r#"🔄 <b>Pull Request Reopened</b> <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
reopened by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>"#;

const PR_SYNCHRONIZE: &str = r#"📝 <b>Pull Request Updated</b> <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
new commits on <code>{{ pr.head }}</code>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>"#;

const PR_READY_FOR_REVIEW: &str = r#"👀 <b>Pull Request Ready for Review</b> <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>"#;

const PR_CONVERTED_TO_DRAFT: &str = r#"📋 <b>Pull Request Converted to Draft</b> <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>"#;

const REVIEW_APPROVED: &str = r#"✅ <b>Review: Approved</b> on <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>{% if review.body %}
<blockquote>{{ truncate(review.body, 500) }}</blockquote>{% endif %}"#;

const REVIEW_CHANGES_REQUESTED: &str = r#"🔧 <b>Review: Changes Requested</b> on <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>{% if review.body %}
<blockquote>{{ truncate(review.body, 500) }}</blockquote>{% endif %}"#;

const REVIEW_COMMENTED: &str = r#"💬 <b>Review Comment</b> on <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>{% if review.body %}
<blockquote>{{ truncate(review.body, 500) }}</blockquote>{% endif %}"#;

const REVIEW_COMMENT_CREATED: &str = r#"💬 <b>New Review Comment</b> on <a href="{{ pr.html_url }}">#{{ pr.number }}: {{ pr.title }}</a>
<code>{{ comment.path }}</code>
by <a href="{{ actor.html_url }}">{{ actor.login }}</a> in <a href="{{ repo.html_url }}">{{ repo.full_name }}</a>
<blockquote>{{ truncate(comment.body, 300) }}</blockquote>"#;

static DEFAULT_TEMPLATES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("pull_request:opened", PR_OPENED),
        ("pull_request:closed", PR_CLOSED),
        (MERGED_KEY, PR_MERGED),
        ("pull_request:reopened", PR_REOPENED),
        ("pull_request:synchronize", PR_SYNCHRONIZE),
        ("pull_request:ready_for_review", PR_READY_FOR_REVIEW),
        ("pull_request:converted_to_draft", PR_CONVERTED_TO_DRAFT),
        ("pull_request_review:approved", REVIEW_APPROVED),
        ("pull_request_review:changes_requested", REVIEW_CHANGES_REQUESTED),
        ("pull_request_review:commented", REVIEW_COMMENTED),
        ("pull_request_review_comment:created", REVIEW_COMMENT_CREATED),
    ])
});

/// Exact-match lookup of a built-in template source. No fallback; a
/// missing key only becomes an error at the renderer when no custom
/// template was supplied either.
pub fn lookup(key: &str) -> Option<&'static str> {
    DEFAULT_TEMPLATES.get(key).copied()
}

#[cfg(test)]
pub(crate) fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    DEFAULT_TEMPLATES.iter().map(|(k, v)| (*k, *v))
}
