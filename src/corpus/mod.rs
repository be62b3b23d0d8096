// Corpus input — reading files and splitting them into metadata and body.

pub mod document;
pub mod extract;
