//! JSON (de)serialization of graphs.

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::JsonReader;
pub use record::{EdgeRecord, GraphRecord, NodeRecord};
pub use writer::JsonWriter;
