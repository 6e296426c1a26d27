use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives the three conversion phases and reports progress on stdout.
pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the full conversion and return the manifest file name.
    pub fn run(&self) -> Result<String> {
        println!("Reading keys...");
        let entries = self.pipeline.extract()?;
        tracing::info!("Read {} keys", entries.len());

        let result = self.pipeline.transform(entries)?;
        tracing::info!("Assigned {} partitions", result.partitions.len());

        println!("Writing keys...");
        self.pipeline.write_pages(&result)?;

        println!("Writing opf...");
        let opf_name = self.pipeline.write_manifest(&result)?;

        println!("Done.");
        Ok(opf_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{KeyedEntries, PartitionSet, TransformResult};
    use crate::utils::error::DictError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPipeline {
        fail_extract: bool,
        calls: RefCell<Vec<&'static str>>,
    }

    impl Pipeline for RecordingPipeline {
        fn extract(&self) -> Result<KeyedEntries> {
            self.calls.borrow_mut().push("extract");
            if self.fail_extract {
                return Err(DictError::BadLine {
                    line: "broken".to_string(),
                });
            }
            Ok(KeyedEntries::new())
        }

        fn transform(&self, entries: KeyedEntries) -> Result<TransformResult> {
            self.calls.borrow_mut().push("transform");
            Ok(TransformResult {
                entries,
                partitions: PartitionSet::default(),
            })
        }

        fn write_pages(&self, _result: &TransformResult) -> Result<()> {
            self.calls.borrow_mut().push("write_pages");
            Ok(())
        }

        fn write_manifest(&self, _result: &TransformResult) -> Result<String> {
            self.calls.borrow_mut().push("write_manifest");
            Ok("dictionary-en-en.opf".to_string())
        }
    }

    #[test]
    fn test_runs_phases_in_order() {
        let engine = Engine::new(RecordingPipeline::default());
        let opf = engine.run().unwrap();
        assert_eq!(opf, "dictionary-en-en.opf");
        assert_eq!(
            *engine.pipeline.calls.borrow(),
            vec!["extract", "transform", "write_pages", "write_manifest"]
        );
    }

    #[test]
    fn test_extract_failure_stops_the_run() {
        let engine = Engine::new(RecordingPipeline {
            fail_extract: true,
            ..Default::default()
        });
        assert!(engine.run().is_err());
        assert_eq!(*engine.pipeline.calls.borrow(), vec!["extract"]);
    }
}
