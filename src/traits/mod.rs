//! Extension traits layered over the core types.

pub mod result_ext;

pub use result_ext::ResultExt;
