use std::fs;

use lamb::{error::ErrorKind, evaluate, get_result, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_lamb_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No lamb examples found in book/src");
}

fn extract_lamb_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```lamb") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: &Value) {
    match evaluate(src) {
        Ok(value) => assert_eq!(&value, expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Script: {src}\nError: {e}"),
    }
}

#[test]
fn programs_span_lines() {
    assert_value("let x = 2 in\nlet y = 3 in\n\nx * y", &Value::Int(6));
}

#[test]
fn strings_are_taken_verbatim() {
    assert_value(r#""a\nb""#, &Value::from(r"a\nb"));
    assert_value("\"two\nlines\"", &Value::from("two\nlines"));
}

#[test]
fn string_recursion_with_builtins() {
    let reverse = r#"
        let rec reverse = \s =>
            if s == "" then "" else reverse (remainingChars s) # firstChar s
        in reverse "stressed"
    "#;
    assert_value(reverse, &Value::from("desserts"));
}

#[test]
fn caesar_shift_with_map_and_fold() {
    let shift = r#"
        let shift = \c => codeChar (charCode c + 1) in
        let letters = List["h", "a", "l"] in
        ListFold (ListMap letters shift) (\acc => \c => acc # c)
    "#;
    assert_value(shift, &Value::from("ibm"));
}

#[test]
fn higher_order_functions() {
    let compose = r"
        let compose = \f => \g => \x => f (g x) in
        let double = \x => x * 2 in
        let inc = \x => x + 1 in
        compose double inc 5
    ";
    assert_value(compose, &Value::Int(12));
}

#[test]
fn syntax_errors_are_reported() {
    assert_failure("let x = in x", ErrorKind::Syntax);
    assert_failure("let x 1 in x", ErrorKind::Syntax);
    assert_failure(r"\ => 1", ErrorKind::Syntax);
    assert_failure("(1 + 2", ErrorKind::Syntax);
    assert_failure("1 + 2)", ErrorKind::Syntax);
    assert_failure("\"open", ErrorKind::Syntax);
    assert_failure("1 ? 2", ErrorKind::Syntax);
}

#[test]
fn runtime_errors_are_reported() {
    assert_failure("undefined", ErrorKind::UnboundVariable);
    assert_failure("if \"yes\" then 1 else 2", ErrorKind::TypeMismatch);
    assert_failure("3 4", ErrorKind::NotAFunction);
    assert_failure("ListGetValue (List[1]) 1", ErrorKind::IndexOutOfRange);
    assert_failure(r"ListFold (List[1]) (\a => \b => a)", ErrorKind::ArityOrShape);
    assert_failure("10 % 0", ErrorKind::Arithmetic);
    assert_failure("codeChar 1114112", ErrorKind::InvalidArgument);
}

#[test]
fn get_result_returns_the_value() {
    assert_eq!(get_result("ListGetSize (List[1, 2])", false).unwrap(), Value::Int(2));
    assert!(get_result("nope", false).is_err());
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.lamb").unwrap();
    assert_value(&contents, &Value::from("ababab"));
}
