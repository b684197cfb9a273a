//! Comment stripping for JSON-with-comments documents.
//!
//! Angular CLI writes `tsconfig*.json` files with `/* ... */` headers, which
//! `serde_json` rejects. [`strip_comments`] removes `//` line comments and
//! `/* */` block comments that sit outside string literals, leaving every
//! other byte untouched (line breaks inside comments are preserved so parse
//! errors still point at the right line).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    String,
    StringEscape,
    LineComment,
    BlockComment,
    BlockCommentStar,
}

/// Remove comments outside string literals.
///
/// An unterminated block comment swallows the rest of the input; the JSON
/// parser then reports the truncated document.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        state = match state {
            State::Code => match c {
                '"' => {
                    out.push(c);
                    State::String
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    State::LineComment
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    State::BlockComment
                }
                _ => {
                    out.push(c);
                    State::Code
                }
            },
            State::String => {
                out.push(c);
                match c {
                    '\\' => State::StringEscape,
                    '"' => State::Code,
                    _ => State::String,
                }
            }
            State::StringEscape => {
                out.push(c);
                State::String
            }
            State::LineComment => {
                if c == '\n' {
                    out.push(c);
                    State::Code
                } else {
                    State::LineComment
                }
            }
            State::BlockComment | State::BlockCommentStar => match c {
                '/' if state == State::BlockCommentStar => State::Code,
                '*' => State::BlockCommentStar,
                '\n' => {
                    out.push(c);
                    State::BlockComment
                }
                _ => State::BlockComment,
            },
        };
    }

    out
}
