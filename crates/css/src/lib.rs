pub mod inline;
pub mod select;
pub mod syntax;

// Re-exports so other crates can just use `css::...` nicely.
pub use inline::strip_properties;
pub use select::{matches_selector, query_selector_path};
pub use syntax::{DeclarationPiece, Selector, split_declarations};
