pub mod explorer;
pub mod fs;
