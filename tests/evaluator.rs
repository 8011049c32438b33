use lamb::{
    error::{Error, ErrorKind, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::core::eval,
        value::{
            core::{Value, ValueKind},
            environment::Environment,
        },
    },
    parse,
};

fn ints(values: &[i64]) -> Value {
    Value::list(ValueKind::Int, values.iter().copied().map(Value::Int).collect())
}

fn strings(values: &[&str]) -> Value {
    Value::list(ValueKind::String, values.iter().copied().map(Value::from).collect())
}

fn eval_ok(source: &str) -> Value {
    evaluate(source).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
}

fn error_kind(source: &str) -> ErrorKind {
    match evaluate(source) {
        Ok(value) => panic!("{source:?} evaluated to {value} but was expected to fail"),
        Err(e) => e.kind(),
    }
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    for n in [0, 1, 42, 1_000_000, i64::MAX] {
        assert_eq!(eval_ok(&n.to_string()), Value::Int(n));
    }
}

#[test]
fn scalar_literals() {
    assert_eq!(eval_ok("true"), Value::Bool(true));
    assert_eq!(eval_ok(r#""hi there""#), Value::from("hi there"));
}

#[test]
fn arithmetic() {
    assert_eq!(eval_ok("1 + 2 * 3"), Value::Int(7));
    assert_eq!(eval_ok("(1 + 2) * 3"), Value::Int(9));
    assert_eq!(eval_ok("10 - 2 - 3"), Value::Int(5));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval_ok("7 / 2"), Value::Int(3));
    assert_eq!(eval_ok("(0 - 7) / 2"), Value::Int(-3));
}

#[test]
fn modulo_is_never_negative() {
    assert_eq!(eval_ok("7 % 3"), Value::Int(1));
    assert_eq!(eval_ok("(0 - 7) % 3"), Value::Int(2));
    assert_eq!(eval_ok("7 % (0 - 3)"), Value::Int(1));
    assert_eq!(eval_ok("(0 - 7) % (0 - 3)"), Value::Int(2));
}

#[test]
fn arithmetic_failures() {
    assert_eq!(error_kind("1 / 0"), ErrorKind::Arithmetic);
    assert_eq!(error_kind("1 % 0"), ErrorKind::Arithmetic);
    assert_eq!(error_kind("9223372036854775807 + 1"), ErrorKind::Arithmetic);
    assert_eq!(error_kind("(0 - 9223372036854775807 - 1) / (0 - 1)"), ErrorKind::Arithmetic);
    assert_eq!(error_kind("true + 1"), ErrorKind::TypeMismatch);
}

#[test]
fn equality_and_concat() {
    assert_eq!(eval_ok("1 + 1 == 2"), Value::Bool(true));
    assert_eq!(eval_ok(r#""a" == "b""#), Value::Bool(false));
    assert_eq!(eval_ok("false == false"), Value::Bool(true));
    assert_eq!(eval_ok(r#""ab" # "cd""#), Value::from("abcd"));

    assert_eq!(error_kind("1 == true"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("1 # 2"), ErrorKind::TypeMismatch);
}

// `a == b == c` is `a == (b == c)`.
#[test]
fn equality_chains_compare_against_the_right_result() {
    assert_eq!(error_kind("1 == 1 == true"), ErrorKind::TypeMismatch);
    assert_eq!(eval_ok("true == 1 == 1"), Value::Bool(true));
    assert_eq!(eval_ok("false == 1 == 2"), Value::Bool(true));
}

#[test]
fn if_selects_a_branch() {
    assert_eq!(eval_ok("if 1 == 1 then 10 else 20"), Value::Int(10));
    assert_eq!(eval_ok("if false then 10 else 20"), Value::Int(20));
    assert_eq!(error_kind("if 1 then 2 else 3"), ErrorKind::TypeMismatch);
}

#[test]
fn if_only_evaluates_the_chosen_branch() {
    assert_eq!(eval_ok("if true then 1 else 1 / 0"), Value::Int(1));
}

#[test]
fn closures_capture_their_environment() {
    assert_eq!(eval_ok(r"let x = 1 in let f = \y => x + y in let x = 100 in f 1"),
               Value::Int(2));
}

#[test]
fn curried_application() {
    assert_eq!(eval_ok(r"(\x => \y => x - y) 10 3"), Value::Int(7));
    assert_eq!(eval_ok(r"let add = \x : Int => \y : Int => x + y in let inc = add 1 in inc 41"),
               Value::Int(42));
}

#[test]
fn recursive_let() {
    assert_eq!(eval_ok(r"let rec fact = \n => if n == 0 then 1 else n * fact (n - 1) in fact 10"),
               Value::Int(3_628_800));
}

#[test]
fn recursive_closure_reused_by_map() {
    assert_eq!(eval_ok(r"let rec f = \x => if x == 0 then 0 else f (x - 1) in ListMap (List[3,4,5]) f"),
               ints(&[0, 0, 0]));
}

#[test]
fn non_recursive_let_cannot_see_itself() {
    assert_eq!(error_kind(r"let f = \x => if x == 0 then 0 else f (x - 1) in f 1"),
               ErrorKind::UnboundVariable);
}

#[test]
fn specific_error_kinds() {
    assert_eq!(error_kind("x"), ErrorKind::UnboundVariable);
    assert_eq!(error_kind("1 2"), ErrorKind::NotAFunction);
    assert_eq!(error_kind(r#""f" 2"#), ErrorKind::NotAFunction);
    assert_eq!(error_kind("List[1] 2"), ErrorKind::NotAFunction);
    assert_eq!(error_kind("List[1,"), ErrorKind::Syntax);
}

#[test]
fn runtime_errors_carry_their_line() {
    let err = evaluate("let y = 1 in\ny +\nx").unwrap_err();

    assert_eq!(err,
               Error::Runtime(RuntimeError::UnboundVariable { name: "x".to_string(),
                                                              line: 3, }));
    assert_eq!(err.to_string(), "Error on line 3: Unbound variable 'x'.");
}

#[test]
fn size_and_emptiness() {
    assert_eq!(eval_ok("ListGetSize (List[1,2,3,4])"), Value::Int(4));
    assert_eq!(eval_ok("ListIsEmpty (List[1])"), Value::Bool(false));
    assert_eq!(eval_ok("ListIsEmpty (ListRemoveAtPosition (List[1]) 0)"), Value::Bool(true));
    assert_eq!(error_kind("ListGetSize 3"), ErrorKind::TypeMismatch);
}

#[test]
fn append() {
    assert_eq!(eval_ok("ListAppend (List[1,2,3]) 4"), ints(&[1, 2, 3, 4]));
    assert_eq!(error_kind("ListAppend (List[1,2,3]) true"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("ListAppend 1 2"), ErrorKind::TypeMismatch);
}

#[test]
fn remove_at_position() {
    assert_eq!(eval_ok("ListRemoveAtPosition (List[0,1,2]) 1"), ints(&[0, 2]));
    assert_eq!(error_kind("ListRemoveAtPosition (List[0,1,2]) 3"), ErrorKind::IndexOutOfRange);
    assert_eq!(error_kind("ListRemoveAtPosition (List[0,1,2]) (0 - 1)"),
               ErrorKind::IndexOutOfRange);
    assert_eq!(error_kind(r#"ListRemoveAtPosition (List[0]) "0""#), ErrorKind::TypeMismatch);
}

#[test]
fn get_value() {
    assert_eq!(eval_ok("ListGetValue (List[5,6,7]) 1"), Value::Int(6));
    assert_eq!(eval_ok("ListGetValue (List[List[1], List[2,3]]) 1"), ints(&[2, 3]));
    assert_eq!(error_kind("ListGetValue (List[5,6,7]) 3"), ErrorKind::IndexOutOfRange);
}

#[test]
fn insert_at() {
    assert_eq!(eval_ok("ListInsertAt (List[1,3]) 2 1"), ints(&[1, 2, 3]));
    assert_eq!(eval_ok("ListInsertAt (List[1,3]) 0 0"), ints(&[0, 1, 3]));
    assert_eq!(eval_ok("ListInsertAt (List[1,3]) 4 2"), ints(&[1, 3, 4]));
    assert_eq!(error_kind("ListInsertAt (List[1,3]) 4 3"), ErrorKind::IndexOutOfRange);
    assert_eq!(error_kind(r#"ListInsertAt (List[1,3]) "x" 0"#), ErrorKind::TypeMismatch);
}

#[test]
fn join() {
    assert_eq!(eval_ok("ListJoin (List[1,2]) (List[3])"), ints(&[1, 2, 3]));
    assert_eq!(eval_ok("let xs = List[1,2] in ListJoin xs xs"), ints(&[1, 2, 1, 2]));
    assert_eq!(error_kind(r#"ListJoin (List[1]) (List["a"])"#), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("ListJoin (List[1]) 2"), ErrorKind::TypeMismatch);
}

#[test]
fn map() {
    assert_eq!(eval_ok(r"ListMap (List[1,2,3]) (\x => x * 2)"), ints(&[2, 4, 6]));
    assert_eq!(eval_ok(r"ListMap (List[1,2]) (\x => x == 2)"),
               Value::list(ValueKind::Bool, vec![Value::Bool(false), Value::Bool(true)]));
    assert_eq!(error_kind(r"ListMap (List[1,2]) (\x => if x == 1 then 1 else true)"),
               ErrorKind::TypeMismatch);
    assert_eq!(error_kind("ListMap (List[1,2]) 3"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind(r"ListMap (List[1,0]) (\x => 1 / x)"), ErrorKind::Arithmetic);
}

#[test]
fn map_over_empty_list_keeps_the_content_type() {
    let value = eval_ok(r"ListMap (ListRemoveAtPosition (List[1]) 0) (\x => x == 1)");

    assert_eq!(value, ints(&[]));
    assert_eq!(value.to_string(), "List[]");
}

#[test]
fn map_builds_a_new_list() {
    assert_eq!(eval_ok(r"let xs = List[1] in let ys = ListMap xs (\x => x) in ListGetSize (ListAppend ys 5) + ListGetSize xs"),
               Value::Int(3));
}

#[test]
fn filter() {
    assert_eq!(eval_ok(r"ListFilter (List[1,2,3,2]) (\x => x == 2)"), ints(&[2, 2]));
    assert_eq!(eval_ok(r"ListFilter (List[5,1,4,2]) (\x => x % 2 == 0)"), ints(&[4, 2]));
    assert_eq!(error_kind(r"ListFilter (List[1,2]) (\x => x)"), ErrorKind::TypeMismatch);
}

#[test]
fn fold() {
    assert_eq!(eval_ok(r"ListFold (List[1,2,3]) (\x => \y => (x * 7) - y)"), Value::Int(32));
    assert_eq!(eval_ok(r#"ListFold (List["a","b","c"]) (\acc => \s => s # acc)"#),
               Value::from("cba"));
}

#[test]
fn fold_does_not_change_the_list() {
    assert_eq!(eval_ok(r"let xs = List[1,2,3] in let sum = ListFold xs (\a => \b => a + b) in ListGetSize xs + sum"),
               Value::Int(9));
}

#[test]
fn fold_shape_errors() {
    assert_eq!(error_kind(r"ListFold (List[1]) (\x => \y => x + y)"), ErrorKind::ArityOrShape);
    assert_eq!(error_kind(r"ListFold (List[1,2]) (\x => x)"), ErrorKind::ArityOrShape);
    assert_eq!(error_kind(r#"ListFold (List["a","b"]) firstChar"#), ErrorKind::ArityOrShape);
    assert_eq!(error_kind("ListFold (List[1,2]) 0"), ErrorKind::TypeMismatch);
}

#[test]
fn mutations_are_visible_through_every_alias() {
    assert_eq!(eval_ok("let xs = List[1] in let ys = ListAppend xs 2 in ListGetSize xs"),
               Value::Int(2));
    assert_eq!(eval_ok(r"let xs = List[1,2,3] in let ys = ListFilter xs (\x => x == 2) in ListGetSize xs"),
               Value::Int(1));
    assert_eq!(eval_ok("let xs = List[1,2] in let ys = ListJoin xs (List[3]) in ListGetValue xs 2"),
               Value::Int(3));
    assert_eq!(eval_ok(r"let xs = List[1] in let f = \u => ListAppend xs u in let a = f 7 in ListGetSize xs"),
               Value::Int(2));
}

#[test]
fn appending_a_list_to_itself_copies_it() {
    let value = eval_ok("let xs = List[List[1]] in ListAppend xs xs");

    assert_eq!(value.to_string(), "List[List[1], List[List[1]]]");
}

#[test]
fn list_literals_only_hold_data() {
    assert_eq!(error_kind("let x = 1 in List[x]"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("List[(1 + 1)]"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("List[1, true]"), ErrorKind::TypeMismatch);
}

#[test]
fn builtins() {
    assert_eq!(eval_ok(r#"firstChar "hello""#), Value::from("h"));
    assert_eq!(eval_ok(r#"remainingChars "hello""#), Value::from("ello"));
    assert_eq!(eval_ok(r#"charCode "A""#), Value::Int(65));
    assert_eq!(eval_ok("codeChar 97"), Value::from("a"));
    assert_eq!(eval_ok(r#"firstChar """#), Value::from(""));
    assert_eq!(eval_ok(r#"remainingChars """#), Value::from(""));
    assert_eq!(eval_ok(r#"firstChar "äb""#), Value::from("ä"));
}

#[test]
fn builtin_failures() {
    assert_eq!(error_kind(r#"charCode """#), ErrorKind::InvalidArgument);
    assert_eq!(error_kind("codeChar 55296"), ErrorKind::InvalidArgument);
    assert_eq!(error_kind("codeChar (0 - 1)"), ErrorKind::InvalidArgument);
    assert_eq!(error_kind("firstChar 1"), ErrorKind::TypeMismatch);
}

#[test]
fn builtins_are_ordinary_functions() {
    assert_eq!(eval_ok(r#"codeChar (charCode "a" + 1)"#), Value::from("b"));
    assert_eq!(eval_ok(r#"ListMap (List["ab", "cd"]) firstChar"#), strings(&["a", "c"]));
    assert_eq!(eval_ok(r#"let head = firstChar in head "xyz""#), Value::from("x"));
    assert_eq!(eval_ok(r#"let firstChar = \s => 1 in firstChar "x""#), Value::Int(1));
}

#[test]
fn evaluating_twice_gives_equal_results() {
    let expr = parse(r"let rec f = \n => if n == 0 then List[0] else ListAppend (f (n - 1)) n in f 3").unwrap();

    let first = eval(&Environment::initial(), &expr).unwrap();
    let second = eval(&Environment::initial(), &expr).unwrap();

    assert_eq!(first, ints(&[0, 1, 2, 3]));
    assert_eq!(first, second);
}

#[test]
fn evaluating_twice_against_a_shared_list_shows_the_first_mutation() {
    let expr = parse("ListAppend xs 9").unwrap();
    let env = Environment::new().extend("xs", ints(&[1]));

    assert_eq!(eval(&env, &expr).unwrap(), ints(&[1, 9]));
    assert_eq!(eval(&env, &expr).unwrap(), ints(&[1, 9, 9]));
}

#[test]
fn values_display() {
    assert_eq!(eval_ok(r"\x => x").to_string(), r"<closure \x>");
    assert_eq!(eval_ok("firstChar").to_string(), "<builtin firstChar>");
    assert_eq!(eval_ok(r#"List["a"]"#).to_string(), r#"List["a"]"#);
    assert_eq!(eval_ok("List[true, false]").to_string(), "List[true, false]");
}

#[test]
fn initial_environment_binds_the_builtins() {
    let env = Environment::initial();

    assert_eq!(env.len(), 4);
    for name in ["firstChar", "remainingChars", "charCode", "codeChar"] {
        assert!(env.contains(name), "{name} is not bound");
    }
    assert!(Environment::new().is_empty());
}
