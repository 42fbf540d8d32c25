// Page layout: font metrics over the WinAnsi code page, page geometry, and the
// cursor-based flow that turns résumé content into positioned draw operations.
// Pure and CPU-bound; the PDF renderer runs it inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod page;
pub mod winansi;

// Re-export the public API consumed by the renderers and templates.
pub use flow::{DrawOp, FlowBuilder, PageLayout};
pub use font_metrics::{FontFace, FontFamily};
pub use page::{default_page_config, PageConfig};
pub use winansi::encode_char;
