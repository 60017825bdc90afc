pub mod items;
pub mod problem;

pub use items::ItemSet;
pub use problem::Problem;
