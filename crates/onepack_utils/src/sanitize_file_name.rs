/// Replace everything but `[A-Za-z0-9_-]` with `_`, so a name can be used in any filename.
pub fn sanitize_file_name(name: &str) -> String {
  name.chars().map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_') { c } else { '_' }).collect()
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("\0+a=Z_0-"), "__a_Z_0-");
  assert_eq!(sanitize_file_name("my app/v1.2"), "my_app_v1_2");
}
