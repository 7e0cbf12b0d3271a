pub mod callout;
pub mod note;

pub use callout::CalloutBlock;
pub use note::Note;
