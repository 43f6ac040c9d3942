//! Assemble self-contained HTML pages that visualize a Newick tree.
//!
//! The page is built from a template directory holding `base.html`, a
//! stylesheet, and four script fragments. The render config, group metadata,
//! and tree description are inlined in place of placeholder tokens.

pub mod error;
pub mod model;
pub mod parser;
pub mod visualization;

pub use error::{ErrorKind, NewickVizError, Result};
pub use model::RenderConfig;
pub use visualization::{default_template_dir, DocumentAssembler};
