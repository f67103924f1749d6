//! genclean - Generated Header Reconciler
//!
//! genclean keeps a directory of generated header files in sync with a
//! directory of source images: any header whose image has been removed is
//! deleted. One sweep per invocation: list both directories, diff the
//! base-name sets, remove the orphans.

pub mod reconcile;

// Re-export commonly used items
pub use reconcile::{
    clean_generated, generated_base_names, image_base_names, CleanReport, RemovedHeader,
    HEADER_EXT,
};
