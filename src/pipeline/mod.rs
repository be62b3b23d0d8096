// Analysis pipeline — per-document stages and the corpus run around them.

pub mod context;
pub mod corpus;
pub mod document;
