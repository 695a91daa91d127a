pub mod atomic_writer;
pub mod directory;

pub use atomic_writer::AtomicWriter;
pub use directory::{create_dir, DirectoryPolicy};
