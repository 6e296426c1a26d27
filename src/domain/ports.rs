use crate::domain::model::{KeyedEntries, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn title(&self) -> &str;
    fn source_lang(&self) -> &str;
    fn target_lang(&self) -> &str;
    fn verbose(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<KeyedEntries>;
    fn transform(&self, entries: KeyedEntries) -> Result<TransformResult>;
    fn write_pages(&self, result: &TransformResult) -> Result<()>;
    fn write_manifest(&self, result: &TransformResult) -> Result<String>;
}
