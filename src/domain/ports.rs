use crate::domain::model::{Document, ReplacementMap, Substitution, UuidSet};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&Path>;
    /// Explicit output location; `None` means `<stem>-replaced<.ext>` next to the input.
    fn output_path(&self) -> Option<&Path>;
}

/// Source of replacement identifiers.
pub trait UuidSource {
    fn generate(&self) -> Uuid;
}

/// Random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidSource;

impl UuidSource for RandomUuidSource {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

pub trait Pipeline {
    fn load(&self) -> Result<Document>;
    fn scan(&self, document: &Document) -> UuidSet;
    fn map(&self, uuids: &UuidSet) -> ReplacementMap;
    fn substitute(&self, document: &Document, map: &ReplacementMap) -> Substitution;
    fn target_path(&self) -> Result<PathBuf>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
