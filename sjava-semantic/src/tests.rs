use sjava_core::{Error, ErrorKind, Result, VarType};
use sjava_syntax::partition;

use crate::{SemanticInfo, validate};

fn check(template: &str) -> Result<SemanticInfo> {
    let lines = template
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();
    let partition = partition(&lines)?;
    validate(&partition)
}

fn error_kind(template: &str) -> ErrorKind {
    match check(template) {
        Ok(_) => panic!("expected the program to be rejected:\n{template}"),
        Err(err) => err.kind(),
    }
}

#[test]
fn test_accepts_well_formed_program() {
    let template = r#"
        final int LIMIT = 10;
        double ratio = 0.5;
        String name = "sjava";
        char initial;

        void main(int count, final boolean verbose) {
            initial = 'a';
            if (verbose && count || ratio) {
                double scaled = count;
                while (true) {
                    helper(scaled, initial, name);
                }
            }
            return;
        }

        void helper(double amount, char letter, String label) {
            int rounded = amount;
            return;
        }
    "#;

    let info = check(template).unwrap();
    assert_eq!(info.methods_checked, 2);
    assert_eq!(info.symbol_table.depth(), 0);

    let limit = info.symbol_table.lookup("LIMIT").unwrap();
    assert!(limit.is_final);
    assert_eq!(limit.ty, VarType::Int);
}

#[test]
fn test_forward_method_references() {
    let template = r#"
        void first() {
            second(1);
            return;
        }
        void second(int n) {
            return;
        }
    "#;
    assert!(check(template).is_ok());
}

#[test]
fn test_validation_is_repeatable() {
    let template = r#"
        int g;
        void foo() {
            g = 1.5;
            return;
        }
    "#;
    let first = check(template).unwrap_err();
    let second = check(template).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.kind(), ErrorKind::Type);
}

#[test]
fn test_block_scope_ends_with_its_brace() {
    let template = r#"
        void foo() {
            if (true) {
                int x = 1;
            }
            x = 2;
            return;
        }
    "#;
    assert_eq!(
        check(template).unwrap_err(),
        Error::UnknownVariable { name: "x".into() }
    );
}

#[test]
fn test_shadowing_is_allowed_but_redeclaration_is_not() {
    let shadowing = r#"
        int x = 1;
        void foo() {
            if (x) {
                int x = 2;
            }
            return;
        }
    "#;
    assert!(check(shadowing).is_ok());

    let redeclaration = r#"
        void foo() {
            while (true) {
                int x = 1;
                int x = 2;
            }
            return;
        }
    "#;
    assert_eq!(
        check(redeclaration).unwrap_err(),
        Error::Redeclaration { name: "x".into() }
    );
}

#[test]
fn test_parameters_can_be_shadowed_in_nested_blocks_only() {
    let template = r#"
        void foo(int a) {
            int a = 2;
            return;
        }
    "#;
    assert_eq!(error_kind(template), ErrorKind::Name);
}

#[test]
fn test_final_variables_are_immutable() {
    let template = r#"
        final int x = 5;
        void foo() {
            x = 6;
            return;
        }
    "#;
    assert_eq!(
        check(template).unwrap_err(),
        Error::AssignToFinal { name: "x".into() }
    );
}

#[test]
fn test_literal_and_variable_assignment_asymmetry() {
    let variables = r#"
        double d;
        int z = 5;
        d = z;
    "#;
    assert!(check(variables).is_ok());

    let literal = r#"
        int i;
        i = 5.0;
    "#;
    assert_eq!(error_kind(literal), ErrorKind::Type);
}

#[test]
fn test_condition_atoms() {
    let numeric = r#"
        void foo(int x) {
            if (x || true) {
            }
            return;
        }
    "#;
    assert!(check(numeric).is_ok());

    let string = r#"
        void foo(String s) {
            if (s) {
            }
            return;
        }
    "#;
    assert_eq!(error_kind(string), ErrorKind::Type);
}

#[test]
fn test_function_call_arguments() {
    let program = |call: &str| {
        format!(
            r#"
            void bar(int a, boolean b) {{
                return;
            }}
            void caller() {{
                {call}
                return;
            }}
            "#
        )
    };

    assert!(check(&program("bar(5, true);")).is_ok());
    assert_eq!(
        check(&program("bar(5);")).unwrap_err(),
        Error::ArgumentCount {
            method: "bar".into(),
            expected: 2,
            found: 1
        }
    );
    assert_eq!(error_kind(&program("bar(5, 3);")), ErrorKind::Type);
    assert_eq!(error_kind(&program("baz();")), ErrorKind::Name);
}

#[test]
fn test_uninitialized_global_used_in_method() {
    let template = r#"
        int g;
        void foo() {
            int local = g;
            return;
        }
    "#;
    assert_eq!(
        check(template).unwrap_err(),
        Error::UninitializedVariable { name: "g".into() }
    );
}

#[test]
fn test_statements_outside_methods() {
    let template = r#"
        void foo() {
            return;
        }
        foo();
    "#;
    assert!(matches!(
        check(template).unwrap_err(),
        Error::StatementOutsideMethod { .. }
    ));
}

#[test]
fn test_first_error_kinds() {
    let programs = [
        "void foo() {\nint a;\n}",
        "int a = b;",
        "final String s;",
        "boolean b = 1;",
        "int 5a;",
        "void foo() {\nif (x > 1) {\n}\nreturn;\n}",
        "void foo() {\nreturn;\n}\nvoid foo() {\nreturn;\n}",
    ];
    let kinds = programs.map(error_kind);

    insta::assert_yaml_snapshot!(kinds, @r"
    - Structural
    - Name
    - Initialization
    - Type
    - Name
    - Syntax
    - Structural
    ");
}
