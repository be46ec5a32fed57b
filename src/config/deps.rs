//! Deps command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

#[derive(Debug, Clone)]
pub struct DepsOptions {
    pub nupkg_path: PathBuf,
    pub format: OutputFormat,
}

impl DepsOptions {
    pub fn builder() -> DepsOptionsBuilder {
        DepsOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct DepsOptionsBuilder {
    nupkg_path: Option<PathBuf>,
    format: Option<OutputFormat>,
}

impl DepsOptionsBuilder {
    pub fn new() -> Self {
        Self {
            nupkg_path: None,
            format: None,
        }
    }

    pub fn with_nupkg_path(mut self, nupkg_path: PathBuf) -> Self {
        self.nupkg_path = Some(nupkg_path);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for DepsOptionsBuilder {
    type Config = DepsOptions;

    fn build(self) -> Result<Self::Config, crate::error::DepvizError> {
        Ok(DepsOptions {
            nupkg_path: self.nupkg_path.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: nupkg_path".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
        })
    }
}
