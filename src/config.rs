use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{FlsError, Result},
    transform::rescale::check_scale,
};

/// Processing parameters for one run.
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```json
/// { "scale": 0.5, "output": "out.png" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessConfig {
    /// Uniform nearest-neighbor scale applied before dithering, 1.0 disables it
    pub scale: f32,
    /// Output file, defaults to `<input stem>_fls.png` in the working directory
    pub output: Option<PathBuf>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            output: None,
        }
    }
}

impl ProcessConfig {
    pub fn validate(&self) -> Result {
        check_scale(self.scale)
    }

    pub fn from_json(json: &str) -> Result<ProcessConfig> {
        let config: ProcessConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ProcessConfig> {
        let file = BufReader::new(File::open(path)?);
        let config: ProcessConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn write_config<P: AsRef<Path>>(&self, path: P) -> Result {
        let mut file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut file, self)?;
        file.flush()?;
        Ok(())
    }

    /// Where the dithered version of `input` is written
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => default_output_path(input),
        }
    }

    /// Output path of every input, in input order.
    ///
    /// Fails when two inputs would write the same file, e.g. `a/photo.png`
    /// and `b/photo.jpg` both map to `photo_fls.png`.
    pub fn output_paths(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::with_capacity(inputs.len());
        inputs
            .iter()
            .map(|input| {
                let output = self.output_path_for(input);
                if !seen.insert(output.clone()) {
                    return Err(FlsError::invalid(format!(
                        "{:?} would overwrite the output {:?} of another input",
                        input, output
                    )));
                }
                Ok(output)
            })
            .collect()
    }
}

/// `<stem>_fls.png`, relative to the working directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(format!("{}_fls.png", stem))
}
