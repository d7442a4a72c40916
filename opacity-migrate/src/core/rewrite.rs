// src/core/rewrite.rs
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::config::{DEPRECATED_METHOD, NAMED_PARAMETER, REPLACEMENT_METHOD};

/// Matches `<receiver>.withOpacity(<arg>)` where the receiver is a dotted
/// identifier chain and the argument runs up to the first `)`.
///
/// Arguments containing their own parentheses are cut at the first `)`.
/// Whatever followed that `)` is left in place after the rewritten call, so
/// `x.withOpacity(f(a), b)` becomes `x.withValues(alpha: f(a), b)` with `b`
/// as a stray second argument.
static DEPRECATED_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(\w+(?:\.\w+)*)\.{DEPRECATED_METHOD}\(([^)]+)\)"))
        .expect("valid regex")
});

/// Result of rewriting one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    pub content: Cow<'a, str>,
    pub replacements: usize,
}

impl Rewrite<'_> {
    #[inline]
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Rewrites every deprecated opacity call in `text` in a single pass.
///
/// Unchanged input is returned borrowed, so callers can skip the write
/// without comparing strings.
#[must_use]
pub fn rewrite_opacity_calls(text: &str) -> Rewrite<'_> {
    let mut replacements = 0;
    let content = DEPRECATED_CALL_RE.replace_all(text, |caps: &Captures<'_>| {
        replacements += 1;
        format!(
            "{}.{REPLACEMENT_METHOD}({NAMED_PARAMETER}: {})",
            &caps[1], &caps[2]
        )
    });

    Rewrite {
        content,
        replacements,
    }
}
