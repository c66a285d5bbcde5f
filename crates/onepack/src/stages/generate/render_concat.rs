use onepack_common::SourceJoiner;
use onepack_utils::rayon::{IntoParallelRefIterator, ParallelIterator};

use super::{pathinfo_comment, GenerateStage};

impl GenerateStage<'_> {
  /// Sources back to back in execution order.
  pub(super) fn render_concat(&self) -> String {
    let module_table = &self.link_output.module_table;
    let pathinfo = self.options.pathinfo;

    let rendered_modules = self
      .link_output
      .sorted_modules
      .par_iter()
      .filter_map(|idx| module_table[*idx].as_normal())
      .map(|module| {
        if pathinfo {
          format!("{}\n{}", pathinfo_comment(&module.stable_id), module.source)
        } else {
          module.source.to_string()
        }
      })
      .collect::<Vec<_>>();

    let mut joiner = SourceJoiner::default();
    rendered_modules.into_iter().for_each(|source| joiner.append_source(source));

    let mut content = joiner.join();
    if !content.is_empty() && !content.ends_with('\n') {
      content.push('\n');
    }
    content
  }
}
