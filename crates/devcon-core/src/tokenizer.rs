//! Command line tokenizer.
//!
//! Splits `name arg1 "arg with spaces" (1, 2, 3)` into a command name and
//! argument tokens. Whitespace only separates tokens outside double quotes
//! and outside parentheses, so tuple literals pass through as one token.
//!
//! Malformed input is never rejected: an unterminated quote or an unclosed
//! `(` keeps the rest of the line in the current token. A `)` with no open
//! parenthesis is kept as text and does not affect nesting.

/// A submitted line split into its command name and raw argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine {
    pub name: String,
    pub args: Vec<String>,
}

/// Tokenize a full command line.
///
/// Returns `None` for a line that is empty after trimming; callers treat
/// that as nothing submitted.
pub fn tokenize(line: &str) -> Option<TokenizedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (trimmed, ""),
    };
    Some(TokenizedLine {
        name: name.to_string(),
        args: split_arguments(rest),
    })
}

/// Split an argument string into tokens, honoring quotes and parentheses.
///
/// Double quotes toggle a quoted region and are removed from the token. A
/// quoted empty string (`""`) produces an empty token.
pub fn split_arguments(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut in_quote = false;
    let mut depth: usize = 0;

    for ch in input.chars() {
        if ch.is_whitespace() && !in_quote && depth == 0 {
            if started {
                tokens.push(std::mem::take(&mut current));
                started = false;
            }
            continue;
        }
        started = true;
        match ch {
            '"' => in_quote = !in_quote,
            '(' if !in_quote => {
                depth += 1;
                current.push(ch);
            },
            ')' if !in_quote => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            },
            _ => current.push(ch),
        }
    }

    if started {
        tokens.push(current);
    }
    if in_quote || depth > 0 {
        log::debug!("unbalanced argument string kept as trailing token: {input:?}");
    }
    tokens
}

/// Quote a token so that [`split_arguments`] yields it back unchanged.
///
/// Tokens without whitespace, quotes, or parentheses are returned as-is.
pub fn quote_token(token: &str) -> String {
    let needs_quotes = token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c == '(' || c == ')');
    if needs_quotes {
        format!("\"{token}\"")
    } else {
        token.to_string()
    }
}
