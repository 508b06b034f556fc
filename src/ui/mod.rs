// UI and formatting module

pub mod formatters;
pub mod layout;
pub mod notices;

// Re-export commonly used items for cleaner imports
pub use formatters::{separator, styled, Style, GRAY};
pub use layout::Layout;
pub use notices::Notice;
