pub mod orchestration;

pub use orchestration::{run_classify, BranchReport, ClassifyArgs};
