use super::source::Source;

/// Joins sources with `\n`, with prepended sources (banners, runtime headers) placed first.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  inner: Vec<Box<dyn Source + Send + 'source>>,
  prepend_source: Vec<Box<dyn Source + Send + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.inner.push(Box::new(source));
  }

  pub fn prepend_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.prepend_source.push(Box::new(source));
  }

  pub fn join(&self) -> String {
    let sources_len = self.prepend_source.len() + self.inner.len();
    let sources_iter = self.prepend_source.iter().chain(self.inner.iter()).enumerate();

    let size_hint_of_ret_source = sources_iter.clone().map(|(_idx, source)| source.content().len()).sum::<usize>()
        + /* Each source we will emit a '\n' but exclude last one */ sources_len.saturating_sub(1);
    let mut ret_source = String::with_capacity(size_hint_of_ret_source);

    for (index, source) in sources_iter {
      ret_source.push_str(source.content());
      if index + 1 < sources_len {
        ret_source.push('\n');
      }
    }

    ret_source
  }
}

#[test]
fn test_join() {
  let mut joiner = SourceJoiner::default();
  joiner.append_source("var a = 1;");
  joiner.append_source(String::from("var b = 2;"));
  joiner.prepend_source("/* header */");
  assert_eq!(joiner.join(), "/* header */\nvar a = 1;\nvar b = 2;");

  assert_eq!(SourceJoiner::default().join(), "");
}
