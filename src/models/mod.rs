pub mod clipboard;
pub mod file_entry;
pub mod tree_node;
