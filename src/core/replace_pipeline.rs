use crate::core::loader::load_document;
use crate::core::mapper::create_uuids_map;
use crate::core::scanner::find_uuids;
use crate::core::substituter::{output_path_for, replace_uuids};
use crate::core::{
    ConfigProvider, Document, Pipeline, ReplacementMap, Storage, Substitution, UuidSet, UuidSource,
};
use crate::utils::error::{ReplaceError, Result};
use crate::utils::validation::validate_distinct_paths;
use std::path::{Path, PathBuf};

pub struct ReplacePipeline<S: Storage, C: ConfigProvider, G: UuidSource> {
    storage: S,
    config: C,
    source: G,
}

impl<S: Storage, C: ConfigProvider, G: UuidSource> ReplacePipeline<S, C, G> {
    pub fn new(storage: S, config: C, source: G) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }

    fn input_path(&self) -> Result<&Path> {
        self.config
            .input_path()
            .ok_or(ReplaceError::MissingInputArgument)
    }
}

impl<S: Storage, C: ConfigProvider, G: UuidSource> Pipeline for ReplacePipeline<S, C, G> {
    fn load(&self) -> Result<Document> {
        let path = self.input_path()?;
        tracing::debug!("Loading {}", path.display());
        load_document(&self.storage, path)
    }

    fn scan(&self, document: &Document) -> UuidSet {
        find_uuids(&document.value)
    }

    fn map(&self, uuids: &UuidSet) -> ReplacementMap {
        create_uuids_map(uuids, &self.source)
    }

    fn substitute(&self, document: &Document, map: &ReplacementMap) -> Substitution {
        replace_uuids(&document.raw, map)
    }

    fn target_path(&self) -> Result<PathBuf> {
        match self.config.output_path() {
            Some(path) => {
                validate_distinct_paths("output", self.input_path()?, path)?;
                Ok(path.to_path_buf())
            }
            None => Ok(output_path_for(self.input_path()?)),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        tracing::debug!("Writing {} bytes to {}", content.len(), path.display());
        self.storage.write_file(path, content.as_bytes())
    }
}
