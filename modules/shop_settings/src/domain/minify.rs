//! Whitespace/comment minifiers for the custom stylesheet and script fields
//!
//! Both are single-pass scanners. They never rename or reorder tokens, only
//! drop comments and insignificant whitespace, so the output is a pure
//! function of the input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    Space,
    Newline,
}

impl Gap {
    fn merge(current: Option<Gap>, next: Gap) -> Option<Gap> {
        match (current, next) {
            (Some(Gap::Newline), _) | (_, Gap::Newline) => Some(Gap::Newline),
            _ => Some(Gap::Space),
        }
    }
}

/// Copy a quoted literal starting at `start` (the opening quote) into `out`.
/// Returns the index after the closing quote. Unterminated single/double
/// quoted strings end at the line break.
fn copy_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    out.push(quote);
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        if c == '\n' && quote != '`' {
            return i;
        }
        out.push(c);
        i += 1;
        if c == '\\' {
            if let Some(&escaped) = chars.get(i) {
                out.push(escaped);
                i += 1;
            }
            continue;
        }
        if c == quote {
            break;
        }
    }
    i
}

/// Skip a `/* ... */` comment starting at `start`. Returns the index after it
/// and whether it spanned a line break.
fn skip_block_comment(chars: &[char], start: usize) -> (usize, bool) {
    let mut i = start + 2;
    let mut newline = false;
    while i < chars.len() {
        if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
            return (i + 2, newline);
        }
        newline |= chars[i] == '\n';
        i += 1;
    }
    (i, newline)
}

// ===== CSS =====

/// At-rules whose block holds rules rather than declarations
const NESTING_AT_RULES: &[&str] = &[
    "media",
    "supports",
    "document",
    "-moz-document",
    "layer",
    "container",
    "scope",
    "starting-style",
];

/// What a `{ ... }` block contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CssBlock {
    Rules,
    Declarations,
}

impl CssBlock {
    fn for_prelude(prelude: &str) -> Self {
        let Some(at_rule) = prelude.trim().strip_prefix('@') else {
            return Self::Declarations;
        };
        let name: String = at_rule
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '-')
            .collect::<String>()
            .to_ascii_lowercase();
        if NESTING_AT_RULES.contains(&name.as_str()) {
            Self::Rules
        } else {
            Self::Declarations
        }
    }
}

fn css_glue_before(prev: Option<char>, in_declarations: bool) -> bool {
    match prev {
        None | Some('{' | '}' | ';' | ',' | '>') => true,
        Some(':') => in_declarations,
        _ => false,
    }
}

fn css_glue_after(next: char, in_declarations: bool) -> bool {
    match next {
        '{' | '}' | ';' | ',' | '>' => true,
        ':' => in_declarations,
        _ => false,
    }
}

/// Minify a stylesheet.
///
/// Drops comments, collapses whitespace, removes it around `{ } ; , >` (and
/// `:` inside declaration blocks) and drops the last `;` of each block.
/// Quoted strings are copied verbatim. Selectors keep their spaces before
/// `:`, also inside `@media` and similar grouping rules.
pub fn minify_css(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut gap = false;
    let mut blocks: Vec<CssBlock> = Vec::new();
    // Byte offset in `out` where the current selector or at-rule prelude began
    let mut prelude_start = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '/' && chars.get(i + 1) == Some(&'*') {
            i = skip_block_comment(&chars, i).0;
            gap = true;
            continue;
        }
        if c.is_whitespace() {
            gap = true;
            i += 1;
            continue;
        }

        if c == '}' && out.ends_with(';') {
            out.pop();
        }
        let in_declarations = blocks.last() == Some(&CssBlock::Declarations);
        if std::mem::take(&mut gap)
            && !css_glue_before(out.chars().last(), in_declarations)
            && !css_glue_after(c, in_declarations)
        {
            out.push(' ');
        }

        match c {
            '"' | '\'' => {
                i = copy_quoted(&chars, i, &mut out);
                continue;
            }
            '{' => blocks.push(CssBlock::for_prelude(
                out.get(prelude_start..).unwrap_or_default(),
            )),
            '}' => {
                blocks.pop();
            }
            _ => {}
        }
        out.push(c);
        if matches!(c, '{' | '}' | ';') {
            prelude_start = out.len();
        }
        i += 1;
    }
    out
}

// ===== JavaScript =====

/// Keywords after which a `/` starts a regex literal rather than a division
const REGEX_PREFIX_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case",
    "do", "else", "yield", "await",
];

/// A line break after these is never significant
const NEWLINE_SAFE_AFTER: &[char] = &[
    '{', '(', '[', ',', ';', ':', '=', '&', '|', '!', '?', '*', '%', '<', '>', '~', '^',
];

/// A line break before these is never significant
const NEWLINE_SAFE_BEFORE: &[char] = &[
    '}', ')', ']', ',', ';', ':', '.', '?', '=', '&', '|', '*', '%', '<', '>', '^',
];

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || !c.is_ascii()
}

fn js_needs_space(prev: char, next: char) -> bool {
    (is_ident_char(prev) && is_ident_char(next))
        || (prev == '+' && next == '+')
        || (prev == '-' && next == '-')
        || (prev == '/' && next == '/')
        || (prev.is_ascii_digit() && next == '.')
}

fn js_separator(out: &mut String, gap: Gap, next: char) {
    let Some(prev) = out.chars().last() else {
        return;
    };
    if gap == Gap::Newline
        && !NEWLINE_SAFE_AFTER.contains(&prev)
        && !NEWLINE_SAFE_BEFORE.contains(&next)
    {
        out.push('\n');
        return;
    }
    if js_needs_space(prev, next) {
        out.push(' ');
    }
}

/// Whether a `/` at the current output position opens a regex literal
fn regex_allowed(out: &str) -> bool {
    let trimmed = out.trim_end();
    let Some(last) = trimmed.chars().last() else {
        return true;
    };
    if matches!(last, ')' | ']' | '}' | '"' | '\'' | '`') {
        return false;
    }
    if is_ident_char(last) {
        let word_start = trimmed
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_ident_char(*c))
            .last()
            .map_or(0, |(idx, _)| idx);
        return REGEX_PREFIX_KEYWORDS.contains(&&trimmed[word_start..]);
    }
    true
}

fn copy_regex(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('/');
    let mut i = start + 1;
    let mut in_class = false;
    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            return i;
        }
        out.push(c);
        i += 1;
        match c {
            '\\' => {
                if let Some(&escaped) = chars.get(i) {
                    out.push(escaped);
                    i += 1;
                }
            }
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => break,
            _ => {}
        }
    }
    i
}

/// Minify a script.
///
/// Drops comments and whitespace that cannot change meaning. String,
/// template and regex literals are copied verbatim. A line break is kept
/// wherever automatic semicolon insertion could depend on it.
pub fn minify_js(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut gap: Option<Gap> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '/' && next == Some('/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }
        if c == '/' && next == Some('*') {
            let (end, newline) = skip_block_comment(&chars, i);
            gap = Gap::merge(gap, if newline { Gap::Newline } else { Gap::Space });
            i = end;
            continue;
        }
        if c.is_whitespace() {
            let kind = if c == '\n' || c == '\r' { Gap::Newline } else { Gap::Space };
            gap = Gap::merge(gap, kind);
            i += 1;
            continue;
        }

        if let Some(pending) = gap.take() {
            js_separator(&mut out, pending, c);
        }

        match c {
            '"' | '\'' | '`' => i = copy_quoted(&chars, i, &mut out),
            '/' if regex_allowed(&out) => i = copy_regex(&chars, i, &mut out),
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}
