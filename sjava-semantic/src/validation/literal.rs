use sjava_core::VarType;

/// Whether `text` is a literal of exactly `ty`. No literal is accepted across types.
pub fn is_literal_of(ty: VarType, text: &str) -> bool {
    match ty {
        VarType::Int => is_int_literal(text),
        VarType::Double => is_double_literal(text),
        VarType::Boolean => is_boolean_literal(text),
        VarType::Char => is_char_literal(text),
        VarType::String => is_string_literal(text),
    }
}

pub fn is_int_literal(text: &str) -> bool {
    let digits = strip_sign(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Digits with an optional fractional part: `1`, `1.`, `.5` and `1.5` are all valid.
pub fn is_double_literal(text: &str) -> bool {
    let number = strip_sign(text);
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    (!whole.is_empty() || !fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

pub fn is_numeric_literal(text: &str) -> bool {
    is_int_literal(text) || is_double_literal(text)
}

pub fn is_boolean_literal(text: &str) -> bool {
    matches!(text, "true" | "false")
}

pub fn is_char_literal(text: &str) -> bool {
    text.strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .is_some_and(|inner| inner.chars().count() == 1)
}

pub fn is_string_literal(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_literals() {
        for valid in ["0", "42", "-7", "+13"] {
            assert!(is_int_literal(valid), "{valid}");
        }
        for invalid in ["", "-", "1.0", "1e3", "--1", " 1", "0x10"] {
            assert!(!is_int_literal(invalid), "{invalid}");
        }
    }

    #[test]
    fn test_double_literals() {
        for valid in ["1", "1.5", "-0.25", ".5", "5.", "+3.0"] {
            assert!(is_double_literal(valid), "{valid}");
        }
        for invalid in ["", ".", "-.", "1.2.3", "1,5", "abc", "1e5"] {
            assert!(!is_double_literal(invalid), "{invalid}");
        }
    }

    #[test]
    fn test_text_literals() {
        assert!(is_char_literal("'a'"));
        assert!(is_char_literal("' '"));
        assert!(!is_char_literal("''"));
        assert!(!is_char_literal("'ab'"));
        assert!(!is_char_literal("\"a\""));

        assert!(is_string_literal("\"\""));
        assert!(is_string_literal("\"hello world\""));
        assert!(!is_string_literal("\""));
        assert!(!is_string_literal("'a'"));
    }

    #[test]
    fn test_no_cross_type_literals() {
        assert!(!is_literal_of(VarType::Int, "5.0"));
        assert!(is_literal_of(VarType::Double, "5"));
        assert!(!is_literal_of(VarType::Boolean, "1"));
        assert!(!is_literal_of(VarType::String, "'a'"));
    }
}
