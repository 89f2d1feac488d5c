/// Forward-only matcher over a single normalized line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'src> {
    rest: &'src str,
}

impl<'src> Cursor<'src> {
    pub fn new(line: &'src str) -> Self {
        Self { rest: line }
    }

    pub fn rest(&self) -> &'src str {
        self.rest
    }

    /// Consumes leading whitespace, returning whether any was present.
    pub fn skip_space(&mut self) -> bool {
        let trimmed = self.rest.trim_start();
        let consumed = trimmed.len() != self.rest.len();
        self.rest = trimmed;
        consumed
    }

    pub fn eat(&mut self, token: &str) -> bool {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Like `eat`, but the token must not run into further word characters.
    pub fn eat_word(&mut self, word: &str) -> bool {
        let Some(rest) = self.rest.strip_prefix(word) else {
            return false;
        };

        if rest.starts_with(is_word_char) {
            return false;
        }

        self.rest = rest;
        true
    }

    /// Consumes a raw word: a letter or underscore, then letters, digits or underscores.
    pub fn eat_name(&mut self) -> Option<&'src str> {
        if !self.rest.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            return None;
        }

        let end = self
            .rest
            .find(|c: char| !is_word_char(c))
            .unwrap_or(self.rest.len());
        let (name, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(name)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits on `separator` outside of single or double quoted literals.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote = None;
    let mut start = 0;

    for (index, c) in text.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), _) if c == open => quote = None,
            (None, _) if c == separator => {
                parts.push(&text[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }

    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_word_respects_boundaries() {
        let mut cursor = Cursor::new("voidfoo()");
        assert!(!cursor.eat_word("void"));
        assert!(cursor.eat("void"));
        assert_eq!(cursor.eat_name(), Some("foo"));
        assert_eq!(cursor.rest(), "()");
    }

    #[test]
    fn test_split_top_level_ignores_quoted_commas() {
        assert_eq!(
            split_top_level(r#"a = "x,y", b = ',', c"#, ','),
            vec![r#"a = "x,y""#, " b = ','", " c"]
        );
        assert_eq!(split_top_level("", ','), vec![""]);
    }
}
