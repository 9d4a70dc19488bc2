use kpreview_ghapi_interface::types::GhIssueComment;

/// Hidden tokens embedded in the status comment.
///
/// The header locates the authoritative comment, the flag records whether a
/// preview was requested.
pub struct StatusMarker;

const HEADER: &str = "<!-- Sticky Pull Request Comment: kube-preview -->";
const FLAG_PREFIX: &str = "<!-- preview-enabled: ";
const FLAG_SUFFIX: &str = " -->";

impl StatusMarker {
    pub fn header() -> &'static str {
        HEADER
    }

    pub fn flag(preview_enabled: bool) -> String {
        format!("{FLAG_PREFIX}{preview_enabled}{FLAG_SUFFIX}")
    }

    pub fn is_status_comment(body: &str) -> bool {
        body.contains(HEADER)
    }

    /// Most recent status comment, if any.
    pub fn find_latest(comments: &[GhIssueComment]) -> Option<&GhIssueComment> {
        comments
            .iter()
            .filter(|comment| Self::is_status_comment(&comment.body))
            .max_by_key(|comment| (comment.created_at, comment.id))
    }

    /// Read the flag from a comment body, `false` when absent or malformed.
    pub fn parse_flag(body: &str) -> bool {
        body.find(FLAG_PREFIX)
            .map(|start| &body[start + FLAG_PREFIX.len()..])
            .and_then(|rest| rest.split_once(FLAG_SUFFIX))
            .map(|(value, _)| value.trim() == "true")
            .unwrap_or(false)
    }
}
