pub mod form;
pub mod metadata;
pub mod path;
pub mod tree;

pub use form::{FormField, FormGroup};
pub use metadata::{FieldMetadata, ANNOTATION_KEY};
pub use path::KeyPath;
pub use tree::{DecoratedLeaf, Node, ObjectNode};
