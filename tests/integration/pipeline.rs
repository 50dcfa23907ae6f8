use pytoc::frontend::ast::{NameVisitor, Node};
use pytoc::frontend::lexer::{dump, tokenize};
use pytoc::frontend::parser::parse;
use pytoc::{translate, CGenerator, TranslateError};

const COUNTDOWN: &str = "\
n = int(input())
while n > 0:
    if n == 1:
        print(\"last\", n)
    elif not n < 10:
        print(\"big\")
    else:
        print(n)
    n = n - 1
print()
";

#[test]
fn test_countdown_program() {
    let c = translate(COUNTDOWN).unwrap();
    let expected_main = "\
int main(void) {
    n = atol((const char *)(read_line()));
    while ((n > 0)) {
        if ((n == 1)) {
            printf(\"%s %ld\\n\", \"last\", (long)(n));
        } else {
            if ((! (n < 10))) {
                printf(\"%s\\n\", \"big\");
            } else {
                printf(\"%ld\\n\", (long)(n));
            }
        }
        n = (n - 1);
    }
    printf(\"\\n\");
    return 0;
}
";
    assert!(c.ends_with(expected_main), "got:\n{c}");
    assert!(c.contains("value_t __pytoc_unused, n;\n"));
}

#[test]
fn test_range_loop_program() {
    let c = translate("total = 0\nfor i in range(1, 11, 2):\n    total = total + i\nprint(total)\n").unwrap();
    assert!(c.contains("value_t __pytoc_unused, total, i;\n"));
    assert!(c.contains("        range_t __range_1 = (range_t){1, 11, 2};\n"));
    assert!(c.contains(
        "        for (i = __range_1.from; range_contains(__range_1, i); i += __range_1.step) {\n            total = (total + i);\n        }\n"
    ));
}

#[test]
fn test_token_scenarios() {
    assert_eq!(
        dump(&tokenize("a = 1\nb = 2")),
        "ID(a) ASS NUMBER(1) LF ID(b) ASS NUMBER(2)"
    );
    assert_eq!(
        dump(&tokenize("if 42:\n    print(\"x\")\nprint()")),
        "IF NUMBER(42) COLON LF INDENT ID(print) LPAREN STRING(x) RPAREN LF DEDENT ID(print) LPAREN RPAREN"
    );
}

#[test]
fn test_tree_shape_names() {
    let tree = parse("x = 1\n").unwrap();
    let mut names = Vec::new();
    let mut stack = vec![&tree];
    while let Some(node) = stack.pop() {
        names.push(node.accept(&mut NameVisitor, ()));
        stack.extend(node.children().iter().rev());
    }
    assert_eq!(
        names,
        vec!["file", "statements", "simple_stmt", "assign", "identifier", "number"]
    );
}

#[test]
fn test_syntax_error_reported() {
    let err = pytoc::frontend::translate("while x\n").unwrap_err();
    assert!(matches!(err, TranslateError::Syntax(_)));
}

#[test]
fn test_hand_built_tree_error() {
    let tree = Node::interior("file", vec![Node::interior("if_stmt", vec![Node::number(1)])]);
    let err = CGenerator::new().generate(&tree).unwrap_err();
    assert_eq!(err.to_string(), "`if_stmt` expects 3 children, got 1");
}
