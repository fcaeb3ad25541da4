pub(crate) mod builtins;
pub(crate) mod cache;
pub(crate) mod compile;
pub(crate) mod error;
pub(crate) mod lexer;
pub(crate) mod vm;
