/// Modules shipped with node, without the `node:` prefix.
static NODE_BUILTIN_MODULES: phf::Set<&'static str> = phf::phf_set! {
  "assert", "assert/strict", "async_hooks", "buffer", "child_process", "cluster", "console",
  "constants", "crypto", "dgram", "diagnostics_channel", "dns", "dns/promises", "domain",
  "events", "fs", "fs/promises", "http", "http2", "https", "inspector", "module", "net", "os",
  "path", "path/posix", "path/win32", "perf_hooks", "process", "punycode", "querystring",
  "readline", "readline/promises", "repl", "stream", "stream/consumers", "stream/promises",
  "stream/web", "string_decoder", "sys", "timers", "timers/promises", "tls", "trace_events",
  "tty", "url", "util", "util/types", "v8", "vm", "wasi", "worker_threads", "zlib",
};

pub fn is_node_builtin_module(specifier: &str) -> bool {
  specifier.starts_with("node:") || NODE_BUILTIN_MODULES.contains(specifier)
}

#[test]
fn test_is_node_builtin_module() {
  assert!(is_node_builtin_module("fs"));
  assert!(is_node_builtin_module("fs/promises"));
  assert!(is_node_builtin_module("node:test"));
  assert!(!is_node_builtin_module("./fs"));
  assert!(!is_node_builtin_module("lodash"));
}
