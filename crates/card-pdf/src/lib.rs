mod assemble;
mod geometry;
pub mod layout;
mod options;
mod types;

pub use assemble::{
    output_file_name, run_batch, BatchSummary, CardDocument, DocumentAssets, COMBINED_FILE_NAME,
};
pub use geometry::{PageGeometry, Quadrant, PAGE_HEIGHT, PAGE_WIDTH};
pub use layout::{needs_name_break, EmbeddedImage};
pub use options::{CardOptions, CardStyle};
pub use types::{CardError, CardUser, OutputMode, Result};
