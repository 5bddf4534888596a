pub mod class_file;
pub mod console;
pub mod prompt;

pub use class_file::{load_class, parse_class, ClassFile};
pub use console::Console;
pub use prompt::collect_gradebook;
