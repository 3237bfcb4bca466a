//! CSS plumbing: tokenizer, declaration parser, inline styles, class lists.

pub mod class_names;
pub mod inline;
pub mod parser;
pub mod tokenizer;

pub use class_names::{cx, ClassNames};
pub use inline::{InlineStyle, StyleDeclaration};
pub use parser::{parse_declarations, ParseError};
