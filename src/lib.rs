// Distant reading: corpus-level analysis of Project Gutenberg texts
//
// This is the library root. Each module corresponds to a stage or a
// supporting subsystem of the analysis pipeline.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod text;
pub mod topics;
