//! Terminal helpers: ANSI stripping and width detection.

/// Widest horizontal rule printed in the summary.
const MAX_RULE_WIDTH: usize = 60;

/// Strip ANSI escape sequences from a string.
///
/// Handles SGR sequences (ending in `m`) and other CSI sequences (ending
/// in any letter in the `@`..`~` range), so cursor movement, erase, etc.
/// are also stripped without consuming unrelated text.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if let Some(next) = chars.next()
                && next == '['
            {
                for inner in chars.by_ref() {
                    if ('@'..='~').contains(&inner) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Width of the summary rule: 60 columns, or less on a narrower terminal.
#[must_use]
pub fn rule_width() -> usize {
    terminal_size::terminal_size()
        .map_or(MAX_RULE_WIDTH, |(terminal_size::Width(w), _)| {
            usize::from(w).clamp(1, MAX_RULE_WIDTH)
        })
}
