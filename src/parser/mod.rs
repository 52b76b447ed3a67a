pub mod builder;
pub mod grammar;
pub mod tokenizer;

pub use builder::build_ast;
pub use grammar::{Token, TokenKind};
pub use tokenizer::tokenize;
