//! Project command configuration

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProjectGraphOptions {
    pub project_path: PathBuf,
    pub diagram_file: Option<PathBuf>,
    pub renderer: Option<PathBuf>,
    pub output_image: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ProjectGraphOptions {
    pub fn builder() -> ProjectGraphOptionsBuilder {
        ProjectGraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct ProjectGraphOptionsBuilder {
    project_path: Option<PathBuf>,
    diagram_file: Option<Option<PathBuf>>,
    renderer: Option<Option<PathBuf>>,
    output_image: Option<Option<PathBuf>>,
    width: Option<Option<u32>>,
    height: Option<Option<u32>>,
}

impl ProjectGraphOptionsBuilder {
    pub fn new() -> Self {
        Self {
            project_path: None,
            diagram_file: None,
            renderer: None,
            output_image: None,
            width: None,
            height: None,
        }
    }

    pub fn with_project_path(mut self, project_path: PathBuf) -> Self {
        self.project_path = Some(project_path);
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

impl crate::common::ConfigBuilder for ProjectGraphOptionsBuilder {
    type Config = ProjectGraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::DepvizError> {
        let options = ProjectGraphOptions {
            project_path: self.project_path.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: project_path".to_string(),
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
