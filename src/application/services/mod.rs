//! Application services

pub mod editor;
pub mod prepare;
pub mod relation;
pub mod rest;

pub use editor::ViewTreeEditor;
pub use prepare::TreePreparer;
pub use relation::RelationLinker;
pub use rest::PayloadTransformer;
