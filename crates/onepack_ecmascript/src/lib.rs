mod ast_scanner;
mod ecma_compiler;

pub use crate::{ast_scanner::EcmaScanResult, ecma_compiler::EcmaCompiler};
