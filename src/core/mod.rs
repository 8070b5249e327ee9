pub mod engine;
pub mod loader;
pub mod mapper;
pub mod replace_pipeline;
pub mod scanner;
pub mod substituter;

pub use crate::domain::model::{
    Document, Replacement, ReplaceOutcome, ReplacementMap, Substitution, UuidSet,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RandomUuidSource, Storage, UuidSource};
pub use crate::utils::error::Result;
