pub mod input_skeleton;
pub mod ui;

pub use input_skeleton::InputSkeleton;
