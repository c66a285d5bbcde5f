use memchr::memchr_iter;

/// 1-based line and column of the byte `offset` in `source`.
pub fn line_column(source: &str, offset: u32) -> (usize, usize) {
  let offset = (offset as usize).min(source.len());
  let before = &source.as_bytes()[..offset];
  let line = memchr_iter(b'\n', before).count() + 1;
  let line_start = memchr::memrchr(b'\n', before).map_or(0, |idx| idx + 1);
  let column = source.get(line_start..offset).map_or(offset - line_start, |s| s.chars().count());
  (line, column + 1)
}

#[test]
fn test_line_column() {
  let source = "const a = require('./a');\nconst b = require('./b');\n";
  assert_eq!(line_column(source, 0), (1, 1));
  assert_eq!(line_column(source, 18), (1, 19));
  assert_eq!(line_column(source, 44), (2, 19));
  assert_eq!(line_column(source, 10_000), (3, 1));
}
