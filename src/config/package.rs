//! Package command configuration

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PackageGraphOptions {
    pub nupkg_path: PathBuf,
    pub diagram_file: Option<PathBuf>,
    pub renderer: Option<PathBuf>,
    pub output_image: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl PackageGraphOptions {
    pub fn builder() -> PackageGraphOptionsBuilder {
        PackageGraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct PackageGraphOptionsBuilder {
    nupkg_path: Option<PathBuf>,
    diagram_file: Option<Option<PathBuf>>,
    renderer: Option<Option<PathBuf>>,
    output_image: Option<Option<PathBuf>>,
    width: Option<Option<u32>>,
    height: Option<Option<u32>>,
}

impl PackageGraphOptionsBuilder {
    pub fn new() -> Self {
        Self {
            nupkg_path: None,
            diagram_file: None,
            renderer: None,
            output_image: None,
            width: None,
            height: None,
        }
    }

    pub fn with_nupkg_path(mut self, nupkg_path: PathBuf) -> Self {
        self.nupkg_path = Some(nupkg_path);
        self
    }

    pub fn with_diagram_file(mut self, diagram_file: Option<PathBuf>) -> Self {
        self.diagram_file = Some(diagram_file);
        self
    }

    pub fn with_renderer(mut self, renderer: Option<PathBuf>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_output_image(mut self, output_image: Option<PathBuf>) -> Self {
        self.output_image = Some(output_image);
        self
    }

    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: Option<u32>) -> Self {
        self.height = Some(height);
        self
    }
}

impl crate::common::ConfigBuilder for PackageGraphOptionsBuilder {
    type Config = PackageGraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::DepvizError> {
        let options = PackageGraphOptions {
            nupkg_path: self.nupkg_path.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: nupkg_path".to_string(),
                }
            })?,
            diagram_file: self.diagram_file.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: diagram_file".to_string(),
                }
            })?,
            renderer: self.renderer.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: renderer".to_string(),
                }
            })?,
            output_image: self.output_image.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: output_image".to_string(),
                }
            })?,
            width: self.width.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: width".to_string(),
                }
            })?,
            height: self.height.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: height".to_string(),
                }
            })?,
        };

        if options.renderer.is_some() && options.output_image.is_none() {
            return Err(crate::error::DepvizError::ConfigurationError {
                message: "An output image path is required when a renderer is set".to_string(),
            });
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_requires_the_archive_path() {
        let result = PackageGraphOptions::builder()
            .with_diagram_file(None)
            .with_renderer(None)
            .with_output_image(None)
            .with_width(None)
            .with_height(None)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_renderer_without_output_image() {
        let result = PackageGraphOptions::builder()
            .with_nupkg_path("acme.nupkg".into())
            .with_diagram_file(None)
            .with_renderer(Some("mmdc".into()))
            .with_output_image(None)
            .with_width(None)
            .with_height(None)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_accepts_a_full_render_configuration() {
        let options = PackageGraphOptions::builder()
            .with_nupkg_path("acme.nupkg".into())
            .with_diagram_file(Some("graph.mmd".into()))
            .with_renderer(Some("mmdc".into()))
            .with_output_image(Some("graph.png".into()))
            .with_width(Some(800))
            .with_height(Some(600))
            .build()
            .unwrap();

        assert_eq!(options.width, Some(800));
        assert_eq!(options.height, Some(600));
    }
}
