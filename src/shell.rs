//! Rendering of command lines for logs and error messages.
//!
//! Commands are never executed through a shell. The rendered form only has
//! to survive a copy-paste into one, so a failed k3d call can be rerun by
//! hand.

/// Quotes `token` for a POSIX shell when it needs quoting.
///
/// Tokens made only of unambiguous characters (flags, names, port mappings)
/// are returned as-is. Anything else is wrapped in single quotes, with each
/// embedded quote written as `'\''`.
#[must_use]
pub fn shell_escape(token: &str) -> String {
    if !token.is_empty() && token.chars().all(needs_no_quoting) {
        token.to_owned()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

/// Renders `program` followed by `args`, each quoted as needed and joined by
/// single spaces.
#[must_use]
pub fn render_command_line<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(AsRef::as_ref))
        .map(shell_escape)
        .collect::<Vec<_>>()
        .join(" ")
}

const fn needs_no_quoting(character: char) -> bool {
    character.is_ascii_alphanumeric()
        || matches!(character, '-' | '_' | '.' | '/' | ':' | '@' | '=' | ',' | '+')
}
