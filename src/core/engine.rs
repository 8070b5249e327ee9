use crate::core::{Pipeline, ReplaceOutcome};
use crate::utils::error::Result;

pub struct ReplaceEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> ReplaceEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_dry_run(pipeline, false)
    }

    pub fn new_with_dry_run(pipeline: P, dry_run: bool) -> Self {
        Self { pipeline, dry_run }
    }

    /// Runs load, scan, map and substitute, then writes unless this is a dry run.
    pub fn run(&self) -> Result<ReplaceOutcome> {
        tracing::info!("📥 Loading input...");
        let document = self.pipeline.load()?;

        tracing::info!("🔍 Scanning for UUIDs...");
        let uuids = self.pipeline.scan(&document);
        tracing::info!("Found {} distinct UUIDs", uuids.len());

        let replacements = self.pipeline.map(&uuids);
        for replacement in replacements.iter() {
            tracing::debug!("{} -> {}", replacement.original, replacement.replacement);
        }

        let substitution = self.pipeline.substitute(&document, &replacements);
        tracing::info!("Replaced {} occurrences", substitution.occurrences);

        let output_path = self.pipeline.target_path()?;

        if self.dry_run {
            tracing::info!("🧪 Dry run, skipping write of {}", output_path.display());
        } else {
            self.pipeline.write(&output_path, &substitution.content)?;
            tracing::info!("💾 Output saved to: {}", output_path.display());
        }

        Ok(ReplaceOutcome {
            output_path,
            written: !self.dry_run,
            occurrences: substitution.occurrences,
            replacements,
        })
    }
}
