use crate::config::customize::Customization;
use crate::core::{manifest, naming, pages, partition, reader};
use crate::domain::model::{KeyedEntries, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use std::fs;

/// Ties the reader, partitioner and writers together over a storage backend.
pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    custom: Customization,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C, custom: Customization) -> Self {
        Self {
            storage,
            config,
            custom,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    fn extract(&self) -> Result<KeyedEntries> {
        tracing::debug!("Reading {}", self.config.input_file());
        let input = fs::read_to_string(self.config.input_file())?;
        reader::read_entries(&input, &self.custom)
    }

    fn transform(&self, entries: KeyedEntries) -> Result<TransformResult> {
        let partitions = partition::partition(&entries);
        tracing::debug!("{} keys over {} partitions", entries.len(), partitions.len());
        Ok(TransformResult {
            entries,
            partitions,
        })
    }

    fn write_pages(&self, result: &TransformResult) -> Result<()> {
        let source = self.config.source_lang();
        let target = self.config.target_lang();

        for (label, keys) in &result.partitions.groups {
            let name = naming::page_file_name(source, target, label);
            tracing::debug!("Key file: {}", name);
            let page = pages::render_page(keys, &result.entries);
            self.storage.write_file(&name, page.as_bytes())?;
        }
        Ok(())
    }

    fn write_manifest(&self, result: &TransformResult) -> Result<String> {
        let source = self.config.source_lang();
        let target = self.config.target_lang();

        let name = naming::opf_file_name(source, target);
        tracing::debug!("Opf: {}", name);
        let opf = manifest::render_opf(
            self.config.title(),
            source,
            target,
            &result.partitions.labels(),
            &manifest::new_identifier(),
        );
        self.storage.write_file(&name, opf.as_bytes())?;
        Ok(name)
    }
}
