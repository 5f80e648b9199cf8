//! Reporter identity parsing.
//!
//! Chat transports hand the engine identities in `nick!user@host` form.
//! Only the nick matters for registration and authorization, so the split
//! lives here and nowhere else.

/// Extract the nickname from a `nick!user@host` identity string.
///
/// Everything from the first `!` onward is dropped. A bare nick passes
/// through unchanged.
pub fn nickname(identity: &str) -> &str {
    match identity.split_once('!') {
        Some((nick, _)) => nick,
        None => identity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_user_and_host() {
        assert_eq!(nickname("Alice!~a@h"), "Alice");
    }

    #[test]
    fn test_bare_nick_passes_through() {
        assert_eq!(nickname("Alice"), "Alice");
    }

    #[test]
    fn test_splits_on_first_bang_only() {
        assert_eq!(nickname("a!b!c@host"), "a");
    }

    #[test]
    fn test_empty_identity() {
        assert_eq!(nickname(""), "");
    }
}
