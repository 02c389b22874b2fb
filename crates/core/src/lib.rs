pub mod convert;
pub mod error;
pub mod fetch;
pub mod options;
pub mod samples;
pub mod stats;
pub mod table;
pub mod text;

pub use convert::{CONVERSION_ERROR_PLACEHOLDER, Direction, html_to_markdown, markdown_to_html};
pub use error::{MdconvError, Result};
pub use fetch::{FetchConfig, fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use options::{ConversionOptions, HeadingStyle};
pub use samples::{SAMPLE_HTML, SAMPLE_MARKDOWN};
pub use stats::{TextStats, calculate_stats};
pub use table::TableGrid;
pub use text::{html_to_text, strip_tags};
