//! NC program parser module.

mod block;
mod extract;

pub use block::{
    classify_line, is_ignorable, strip_inline_comment, tokenize, Block, LineClass, Word,
};
pub use extract::{extract, Extractor};
