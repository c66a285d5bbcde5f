/// Quote `value` as a JavaScript string literal.
pub fn js_string_literal(value: &str) -> String {
  // A JSON string is a valid JS string literal since ES2019.
  serde_json::Value::from(value).to_string()
}

#[test]
fn test_js_string_literal() {
  assert_eq!(js_string_literal("src/main.js"), r#""src/main.js""#);
  assert_eq!(js_string_literal(r#"a"b\c"#), r#""a\"b\\c""#);
  assert_eq!(js_string_literal("line\nbreak"), r#""line\nbreak""#);
}
