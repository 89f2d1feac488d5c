use serde::Serialize;
use sjava_core::{Error, Result, VarType, is_reserved_word};

use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum LineKind {
    MethodHeader,
    VariableDeclaration,
    VariableAssignment,
    FunctionCall,
    ConditionOrLoopStart,
    BlockEnd,
    ReturnStatement,
}

/// Classifies a normalized line. Grammars are tried in a fixed order and the first match
/// wins, so a line always gets exactly one kind.
pub fn classify(line: &str) -> Result<LineKind> {
    let line = line.trim();

    let kind = if method_header_parts(line).is_some() {
        LineKind::MethodHeader
    } else if is_declaration(line) {
        LineKind::VariableDeclaration
    } else if is_assignment(line) {
        LineKind::VariableAssignment
    } else if call_parts(line).is_some() {
        LineKind::FunctionCall
    } else if condition_expression(line).is_some() {
        LineKind::ConditionOrLoopStart
    } else if line == "}" {
        LineKind::BlockEnd
    } else if line == "return;" {
        LineKind::ReturnStatement
    } else {
        return Err(Error::UnrecognizedLine { line: line.into() });
    };

    tracing::trace!("classified '{line}' as {kind:?}");
    Ok(kind)
}

/// `void name(params) {` split into the raw name and the raw parameter text.
pub fn method_header_parts(line: &str) -> Option<(&str, &str)> {
    let mut cursor = Cursor::new(line.trim());
    if !cursor.eat_word("void") || !cursor.skip_space() {
        return None;
    }

    let name = cursor.eat_name()?;
    cursor.skip_space();
    if !cursor.eat("(") {
        return None;
    }

    let params = cursor
        .rest()
        .strip_suffix('{')?
        .trim_end()
        .strip_suffix(')')?;

    if params.contains(['(', ')']) {
        return None;
    }

    Some((name, params))
}

/// `callee(args);` split into the callee name and the raw argument text.
pub fn call_parts(line: &str) -> Option<(&str, &str)> {
    let mut cursor = Cursor::new(line.trim());
    let callee = cursor.eat_name().filter(|name| !is_reserved_word(name))?;
    cursor.skip_space();
    if !cursor.eat("(") {
        return None;
    }

    let args = cursor
        .rest()
        .strip_suffix(';')?
        .trim_end()
        .strip_suffix(')')?;

    Some((callee, args.trim()))
}

/// The text between the parentheses of an `if (...) {` or `while (...) {` line.
pub fn condition_expression(line: &str) -> Option<&str> {
    let mut cursor = Cursor::new(line.trim());
    if !cursor.eat_word("if") && !cursor.eat_word("while") {
        return None;
    }

    cursor.skip_space();
    if !cursor.eat("(") {
        return None;
    }

    let expression = cursor
        .rest()
        .strip_suffix('{')?
        .trim_end()
        .strip_suffix(')')?;

    Some(expression.trim())
}

fn is_declaration(line: &str) -> bool {
    let mut cursor = Cursor::new(line);
    if cursor.eat_word("final") && !cursor.skip_space() {
        return false;
    }

    let is_type = cursor
        .eat_name()
        .and_then(VarType::from_keyword)
        .is_some();

    is_type && cursor.skip_space() && has_statement_body(cursor.rest())
}

fn is_assignment(line: &str) -> bool {
    let mut cursor = Cursor::new(line);
    if cursor.eat_name().filter(|name| !is_reserved_word(name)).is_none() {
        return false;
    }

    cursor.skip_space();
    cursor.eat("=") && !cursor.rest().starts_with('=') && has_statement_body(cursor.rest())
}

/// Non-empty text terminated by a `;`.
fn has_statement_body(rest: &str) -> bool {
    rest.strip_suffix(';')
        .is_some_and(|body| !body.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(lines: &[&str]) -> Vec<LineKind> {
        lines
            .iter()
            .map(|line| classify(line).expect("line should classify"))
            .collect()
    }

    #[test]
    fn test_classifies_every_kind() {
        let lines = [
            "void foo(int a, final double b) {",
            "final int x = 5, y;",
            "x = 7;",
            "foo(1, 2.5);",
            "if (a || true) {",
            "while(b){",
            "}",
            "return;",
        ];

        insta::assert_yaml_snapshot!(kinds(&lines), @r"
        - MethodHeader
        - VariableDeclaration
        - VariableAssignment
        - FunctionCall
        - ConditionOrLoopStart
        - ConditionOrLoopStart
        - BlockEnd
        - ReturnStatement
        ");
    }

    #[test]
    fn test_priority_resolves_keyword_lookalikes() {
        // `int` followed by a parenthesis is not a declaration, and reserved words are not callees.
        assert!(classify("int(5);").is_err());
        assert!(classify("while (x);").is_err());
        assert!(classify("final x = 5;").is_err());
        assert_eq!(classify("voided(1);").unwrap(), LineKind::FunctionCall);
        assert_eq!(classify("integer = 1;").unwrap(), LineKind::VariableAssignment);
    }

    #[test]
    fn test_rejects_unknown_lines() {
        for line in ["return 5;", "x == 5;", "x = ;", "int ;", "if (x) ;", "{", "void foo();"] {
            let err = classify(line).unwrap_err();
            assert_eq!(err, Error::UnrecognizedLine { line: line.into() });
        }
    }

    #[test]
    fn test_extracts_parts() {
        assert_eq!(
            method_header_parts("void foo (int a, char c) {"),
            Some(("foo", "int a, char c"))
        );
        assert_eq!(method_header_parts("void foo(int a)) {"), None);
        assert_eq!(call_parts("bar( 5, true );"), Some(("bar", "5, true")));
        assert_eq!(call_parts("bar();"), Some(("bar", "")));
        assert_eq!(condition_expression("if (a && b) {"), Some("a && b"));
        assert_eq!(condition_expression("if() {"), Some(""));
    }
}
