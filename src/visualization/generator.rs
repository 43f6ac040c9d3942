use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::error::{NewickVizError, Result};
use crate::model::RenderConfig;
use crate::visualization::data::VizConfig;
use crate::visualization::templates::{
    BASE_TEMPLATE, CONFIG_PLACEHOLDER, GROUP_PLACEHOLDER, NEWICK_DELIMITER, NEWICK_PLACEHOLDER,
    SCRIPT_FILES, SCRIPT_PLACEHOLDER, SCRIPT_SEPARATOR, STYLE_FILE, STYLE_PLACEHOLDER,
    TEMPLATE_DIR_NAME,
};

/// Builds a self-contained tree page from the files in a template directory.
///
/// Holds nothing but the directory path, so one assembler can be shared
/// freely between threads. Files are re-read on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAssembler {
    template_dir: PathBuf,
}

impl DocumentAssembler {
    /// Use the template directory bundled at the package root
    pub fn new() -> Self {
        Self::with_template_dir(default_template_dir())
    }

    /// Use an explicit template directory. Nothing is checked until assembly.
    pub fn with_template_dir<P: Into<PathBuf>>(template_dir: P) -> Self {
        Self { template_dir: template_dir.into() }
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Assemble the page for a tree description, its group metadata, and a render config
    pub fn assemble<G>(&self, config: &RenderConfig, groups: &G, newick: &str) -> Result<String>
    where
        G: Serialize + ?Sized,
    {
        self.render(config, groups, newick).map_err(log_failure)
    }

    /// Like [`assemble`](Self::assemble), but validates a raw config mapping first
    pub fn assemble_from_map<G>(
        &self,
        config: &Map<String, Value>,
        groups: &G,
        newick: &str,
    ) -> Result<String>
    where
        G: Serialize + ?Sized,
    {
        let config = RenderConfig::from_map(config).map_err(log_failure)?;
        self.assemble(&config, groups, newick)
    }

    /// Assemble the page and write it to `output_path`
    pub fn render_to_file<G>(
        &self,
        config: &RenderConfig,
        groups: &G,
        newick: &str,
        output_path: &Path,
    ) -> Result<()>
    where
        G: Serialize + ?Sized,
    {
        let html = self.assemble(config, groups, newick)?;
        std::fs::write(output_path, html)?;
        debug!(path = %output_path.display(), "wrote page");
        Ok(())
    }

    fn render<G>(&self, config: &RenderConfig, groups: &G, newick: &str) -> Result<String>
    where
        G: Serialize + ?Sized,
    {
        let template = self.read_resource(BASE_TEMPLATE)?;

        let scripts = SCRIPT_FILES
            .iter()
            .map(|name| self.read_resource(name))
            .collect::<Result<Vec<_>>>()?
            .join(SCRIPT_SEPARATOR);

        let style = self.read_resource(STYLE_FILE)?;

        let config_json = serde_json::to_string_pretty(&VizConfig::from_config(config)?)?;
        let groups_json = serde_json::to_string_pretty(groups)?;

        if newick.contains(NEWICK_DELIMITER) {
            warn!("tree description contains '{}', the embedded literal will be broken", NEWICK_DELIMITER);
        }
        let newick_literal = format!("{d}{}{d}", newick, d = NEWICK_DELIMITER);

        // Inline everything into the base markup
        let html = template
            .replace(STYLE_PLACEHOLDER, &style)
            .replace(CONFIG_PLACEHOLDER, &config_json)
            .replace(GROUP_PLACEHOLDER, &groups_json)
            .replace(NEWICK_PLACEHOLDER, &newick_literal)
            .replace(SCRIPT_PLACEHOLDER, &scripts);

        Ok(html)
    }

    fn read_resource(&self, relative: &str) -> Result<String> {
        let path = self.template_dir.join(relative);
        debug!(path = %path.display(), "reading template resource");
        std::fs::read_to_string(&path)
            .map_err(|source| NewickVizError::MissingResource { path, source })
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// `<package root>/templates`
pub fn default_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME)
}

fn log_failure(err: NewickVizError) -> NewickVizError {
    error!(kind = ?err.kind(), detail = ?err, "{}", err);
    err
}
