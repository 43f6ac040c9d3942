/// Directory, relative to the package root, holding the bundled page template
pub const TEMPLATE_DIR_NAME: &str = "templates";

/// Base markup with placeholder tokens
pub const BASE_TEMPLATE: &str = "base.html";

/// Stylesheet inlined into the page
pub const STYLE_FILE: &str = "styles/main.css";

/// Script fragments, concatenated in this order
pub const SCRIPT_FILES: [&str; 4] = [
    "scripts/layout.js",
    "scripts/tree.js",
    "scripts/groups.js",
    "scripts/main.js",
];

/// Separator placed between consecutive script fragments
pub const SCRIPT_SEPARATOR: &str = "\n";

// Placeholder tokens that must appear in `base.html`
pub const STYLE_PLACEHOLDER: &str = "STYLE_CONTENT";
pub const CONFIG_PLACEHOLDER: &str = "CONFIG_CONTENT";
pub const GROUP_PLACEHOLDER: &str = "GROUP_CONTENT";
pub const NEWICK_PLACEHOLDER: &str = "NEWICK_CONTENT";
pub const SCRIPT_PLACEHOLDER: &str = "SCRIPT_CONTENT";

/// Delimiter wrapping the tree description in the page's script literal
pub const NEWICK_DELIMITER: char = '`';
