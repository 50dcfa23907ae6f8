//! C text templates
//!
//! The fixed runtime prelude every translated program starts with, and
//! the shapes builtin calls lower to.

/// Includes, the value and range types, and the helpers generated code
/// calls. Globals and `main` follow it.
///
/// `range_contains` treats a range as half-open: `from` is included, `to`
/// is not, so `range(1, 5)` visits 1 to 4 like the source language does.
pub const PRELUDE: &str = r#"#include <stdio.h>
#include <stdlib.h>
#include <stdint.h>
#include <string.h>

typedef intptr_t value_t;

typedef struct {
    value_t from;
    value_t to;
    value_t step;
} range_t;

static int range_contains(range_t r, value_t v) {
    if (r.step > 0) {
        return r.from <= v && v < r.to;
    }
    if (r.step < 0) {
        return r.to < v && v <= r.from;
    }
    return 0;
}

static value_t read_line(void) {
    size_t cap = 64;
    size_t len = 0;
    char *buf = malloc(cap);
    int c;
    if (buf == NULL) {
        return (value_t)0;
    }
    while ((c = getchar()) != EOF && c != '\n') {
        if (len + 1 == cap) {
            char *grown = realloc(buf, cap * 2);
            if (grown == NULL) {
                break;
            }
            buf = grown;
            cap *= 2;
        }
        buf[len++] = (char)c;
    }
    buf[len] = '\0';
    return (value_t)buf;
}
"#;

/// Whole translation unit around an already indented `main` body
pub fn program<'a>(
    globals: impl IntoIterator<Item = &'a str>,
    body: &str,
    indent: &str,
) -> String {
    let globals: Vec<&str> = globals.into_iter().collect();
    let mut out = String::from(PRELUDE);
    out.push('\n');
    out.push_str(&format!("value_t {};\n\n", globals.join(", ")));
    out.push_str("int main(void) {\n");
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str("return 0;\n}\n");
    out
}

/// One rendered `print` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintArg {
    /// String literal, printed with `%s`
    Text(String),
    /// Anything else, printed as a number
    Value(String),
}

/// `printf` call printing the arguments space separated, then a newline
pub fn print_call(args: &[PrintArg]) -> String {
    if args.is_empty() {
        return r#"printf("\n")"#.to_string();
    }

    let format = args
        .iter()
        .map(|arg| match arg {
            PrintArg::Text(_) => "%s",
            PrintArg::Value(_) => "%ld",
        })
        .collect::<Vec<_>>()
        .join(" ");
    let values = args
        .iter()
        .map(|arg| match arg {
            PrintArg::Text(text) => text.clone(),
            PrintArg::Value(value) => format!("(long)({value})"),
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(r#"printf("{format}\n", {values})"#)
}

/// `range(...)` literal. Argument counts other than 1 to 3 yield the empty
/// range `{0, 0, 0}`.
pub fn range_literal(args: &[String]) -> String {
    let (from, to, step) = match args {
        [to] => ("0", to.as_str(), "1"),
        [from, to] => (from.as_str(), to.as_str(), "1"),
        [from, to, step] => (from.as_str(), to.as_str(), step.as_str()),
        _ => ("0", "0", "0"),
    };
    format!("(range_t){{{from}, {to}, {step}}}")
}

/// `int(x)`: parse the string `x` points at
pub fn parse_int_call(arg: &str) -> String {
    format!("atol((const char *)({arg}))")
}

/// `input()`
pub fn read_line_call() -> String {
    "read_line()".to_string()
}
