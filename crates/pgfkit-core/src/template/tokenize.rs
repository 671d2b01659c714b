//! Tokenization for document templates
//!
//! Provides O(n) tokenization using a state machine.

use crate::region::Region;

/// What a recognised piece of template syntax stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// `$$`, rendered as a single `$`
    Dollar,
    /// `$name` or `${name}` naming a region
    Placeholder(Region),
}

/// A single token with its position in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Absolute byte position of `$` in template
    pub start: usize,
    /// Total length in bytes including `$` and any braces
    pub length: usize,
}

/// Tokenization state machine
///
/// ```text
/// Normal ──$──> SeenDollar ──$──────────> [Yield Dollar] → Normal
///                   │
///                   ├──{──> InBraced ──}──> [Yield Placeholder if known] → Normal
///                   │
///                   └─name─> InName ──(not name)──> [Yield Placeholder if known] → Normal
/// ```
///
/// Anything that does not complete a known placeholder stays plain text.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Normal,
    SeenDollar { start: usize },
    InName { start: usize, name_start: usize },
    InBraced { start: usize, name_start: usize },
}

/// Find the `$$` and region placeholder tokens of a template
///
/// Each byte is visited at most twice (a byte that ends a failed placeholder
/// is re-examined once as plain text), so the scan is linear in the
/// template length.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut state = ScanState::Normal;
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        match state {
            ScanState::Normal => {
                if byte == b'$' {
                    state = ScanState::SeenDollar { start: pos };
                }
                pos += 1;
            }
            ScanState::SeenDollar { start } => {
                if byte == b'$' {
                    tokens.push(Token {
                        kind: TokenKind::Dollar,
                        start,
                        length: 2,
                    });
                    state = ScanState::Normal;
                    pos += 1;
                } else if byte == b'{' {
                    state = ScanState::InBraced {
                        start,
                        name_start: pos + 1,
                    };
                    pos += 1;
                } else if is_name_start(byte) {
                    state = ScanState::InName {
                        start,
                        name_start: pos,
                    };
                    pos += 1;
                } else {
                    // Lone `$`, reprocess this byte as plain text
                    state = ScanState::Normal;
                }
            }
            ScanState::InName { start, name_start } => {
                if is_name_continue(byte) {
                    pos += 1;
                } else {
                    push_placeholder(&mut tokens, text, start, name_start, pos, pos);
                    state = ScanState::Normal;
                }
            }
            ScanState::InBraced { start, name_start } => {
                let valid = if pos == name_start {
                    is_name_start(byte)
                } else {
                    is_name_continue(byte)
                };
                if byte == b'}' && pos > name_start {
                    push_placeholder(&mut tokens, text, start, name_start, pos, pos + 1);
                    state = ScanState::Normal;
                    pos += 1;
                } else if valid {
                    pos += 1;
                } else {
                    // Not a placeholder, reprocess this byte as plain text
                    state = ScanState::Normal;
                }
            }
        }
    }

    if let ScanState::InName { start, name_start } = state {
        push_placeholder(&mut tokens, text, start, name_start, bytes.len(), bytes.len());
    }
    tokens
}

fn push_placeholder(
    tokens: &mut Vec<Token>,
    text: &str,
    start: usize,
    name_start: usize,
    name_end: usize,
    end: usize,
) {
    if let Some(region) = Region::from_name(&text[name_start..name_end]) {
        tokens.push(Token {
            kind: TokenKind::Placeholder(region),
            start,
            length: end - start,
        });
    }
}

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_single_placeholder() {
        let tokens = tokenize("[$axis_options\n]");
        assert_eq!(
            tokens,
            [Token {
                kind: TokenKind::Placeholder(Region::AxisOptions),
                start: 1,
                length: "$axis_options".len(),
            }]
        );
    }

    #[test]
    fn test_tokenize_braced_placeholder() {
        let tokens = tokenize("a${footer}b");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Placeholder(Region::Footer));
        assert_eq!(tokens[0].start, 1);
        assert_eq!(tokens[0].length, "${footer}".len());
    }

    #[test]
    fn test_tokenize_placeholder_at_end_of_input() {
        let tokens = tokenize("% end\n$tikz_footer");
        assert_eq!(tokens[0].kind, TokenKind::Placeholder(Region::TikzFooter));
        assert_eq!(tokens[0].start, 6);
    }

    #[test]
    fn test_tokenize_double_dollar() {
        let tokens = tokenize("$$footer");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Dollar);
        assert_eq!(tokens[0].length, 2);
    }

    #[test]
    fn test_tokenize_ignores_braces_and_backslashes() {
        let tokens = tokenize(r"\begin{axis}{{font=\small}}\\ \end{axis}");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_skips_unknown_names() {
        assert!(tokenize("$x^2$ and ${legend} and $footers").is_empty());
    }

    #[test]
    fn test_tokenize_skips_malformed_braces() {
        assert!(tokenize("${}^{14}$C ${foot er} ${footer").is_empty());
    }

    #[test]
    fn test_tokenize_rescans_dollar_after_failed_placeholder() {
        let tokens = tokenize("${$footer}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start, 2);
        assert_eq!(tokens[0].kind, TokenKind::Placeholder(Region::Footer));
    }
}
