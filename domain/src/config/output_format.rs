//! Output format value object

use serde::{Deserialize, Serialize};

/// How rendered plans are printed
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal text with highlighted hosts (default)
    #[default]
    Text,
    /// HTML fragment, one block per plan
    Html,
    /// The rendered plans as JSON
    Json,
}
