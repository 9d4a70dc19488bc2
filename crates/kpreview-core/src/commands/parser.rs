use kpreview_models::PreviewCommand;
use tracing::info;

/// Command parser.
pub struct CommandParser;

impl CommandParser {
    /// Parse the first valid preview command from a comment body.
    ///
    /// A command line starts with the mention prefix (any case), followed by
    /// the exact command name.
    pub fn parse_command(prefix: &str, comment_body: &str) -> Option<PreviewCommand> {
        let mut prefixed_lines = 0;

        for line in comment_body.lines() {
            if let Some(remainder) = Self::strip_prefix(prefix, line.trim()) {
                prefixed_lines += 1;

                match remainder.trim().parse::<PreviewCommand>() {
                    Ok(command) => return Some(command),
                    Err(_) => info!(
                        command = remainder.trim(),
                        message = "HINT: Unknown command, expected add-preview or remove-preview"
                    ),
                }
            }
        }

        if prefixed_lines == 0 {
            info!(
                prefix = prefix,
                message = "HINT: Preview commands must start with the mention prefix"
            );
        }

        None
    }

    fn strip_prefix<'a>(prefix: &str, line: &'a str) -> Option<&'a str> {
        if prefix.is_empty() {
            return None;
        }

        line.get(..prefix.len())
            .filter(|start| start.eq_ignore_ascii_case(prefix))
            .map(|_| &line[prefix.len()..])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PREFIX: &str = "@github-actions";

    #[test]
    fn parse_known_commands() {
        assert_eq!(
            CommandParser::parse_command(PREFIX, "@github-actions add-preview"),
            Some(PreviewCommand::AddPreview)
        );
        assert_eq!(
            CommandParser::parse_command(PREFIX, "@github-actions remove-preview"),
            Some(PreviewCommand::RemovePreview)
        );
    }

    #[test]
    fn parse_unknown_commands() {
        assert_eq!(
            CommandParser::parse_command(PREFIX, "@github-actions bogus"),
            None
        );
        assert_eq!(CommandParser::parse_command(PREFIX, "hello"), None);
        assert_eq!(CommandParser::parse_command(PREFIX, ""), None);
    }

    #[test]
    fn prefix_is_case_insensitive_command_is_not() {
        assert_eq!(
            CommandParser::parse_command(PREFIX, "@GitHub-Actions   add-preview  "),
            Some(PreviewCommand::AddPreview)
        );
        assert_eq!(
            CommandParser::parse_command(PREFIX, "@github-actions Add-Preview"),
            None
        );
    }

    #[test]
    fn parse_multiline_comment() {
        assert_eq!(
            CommandParser::parse_command(
                PREFIX,
                "Looks good to me.\n@github-actions nope\n@github-actions remove-preview\n"
            ),
            Some(PreviewCommand::RemovePreview)
        );
    }

    #[test]
    fn non_ascii_comment() {
        assert_eq!(CommandParser::parse_command(PREFIX, "été 🚀"), None);
    }
}
