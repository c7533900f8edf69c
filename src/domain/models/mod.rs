mod analysis_result;
mod claim;
mod envelope;
mod verdict;

pub use analysis_result::*;
pub use claim::*;
pub use envelope::*;
pub use verdict::*;
