use kpreview_models::MessageKind;

use super::StatusMarker;

const LOGO_URL: &str =
    "https://github.com/vendanor/preview-pull-request/blob/main/logo.png?raw=true";

/// Renders status comment bodies.
pub struct StatusMessageGenerator<'a> {
    /// Mention prefix, shown in the help footer.
    pub comment_prefix: &'a str,
    /// Latest commit short SHA.
    pub short_sha: &'a str,
}

impl<'a> StatusMessageGenerator<'a> {
    /// Render a full comment body, markers included.
    ///
    /// `content` is the preview host for `success` and the error message for
    /// `fail`; it is ignored otherwise.
    pub fn generate(&self, kind: MessageKind, content: Option<&str>) -> String {
        format!(
            "{flag}\n![preview]({LOGO_URL} \"preview\")\n\n{message}\n\n{footer}\n{header}",
            flag = StatusMarker::flag(kind.preview_enabled()),
            message = self.message(kind, content),
            footer = self.footer(),
            header = StatusMarker::header(),
        )
    }

    fn message(&self, kind: MessageKind, content: Option<&str>) -> String {
        let sha = self.short_sha;

        match kind {
            MessageKind::Welcome => "👷 Hello! Do you want to preview your stuff?".into(),
            MessageKind::Brewing => {
                format!("👷 A new version ({sha}) is currently building...")
            }
            MessageKind::Success => match content {
                Some(host) => format!("🔥 Your preview ({sha}) is available here:\n<https://{host}>"),
                None => format!("🔥 Your preview ({sha}) is available."),
            },
            MessageKind::Fail => {
                let mut message = format!(
                    "🚨 Preview :: Last job failed! 🚨\nYour preview ({sha}) is (not yet) available."
                );
                if let Some(error) = content.filter(|e| !e.trim().is_empty()) {
                    let fence = code_fence(error);
                    message.push_str(&format!("\n\n{fence}\n{}\n{fence}", error.trim()));
                }
                message
            }
            MessageKind::Removed => "All previews are uninstalled from Kubernetes.".into(),
            MessageKind::Cancelled => format!(
                "🚨 Preview :: Last job cancelled 🚨\nYour preview ({sha}) is (not yet) available."
            ),
        }
    }

    fn footer(&self) -> String {
        let prefix = self.comment_prefix;

        format!(
            "You can trigger preview-pull-request by commenting on this PR:\n\
            - `{prefix} add-preview` will deploy a preview\n\
            - `{prefix} remove-preview` will remove a preview\n\n\
            Previews will be removed when you close the PR"
        )
    }
}

/// Backtick fence longer than any backtick run inside `text`.
fn code_fence(text: &str) -> String {
    let longest = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);

    "`".repeat(longest.max(2) + 1)
}
