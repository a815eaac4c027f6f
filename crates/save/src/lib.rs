mod file_header;
mod json_codec;
mod layout_file;
mod save_error;
mod save_plugin;
mod save_types;
mod snapshot;
pub mod serialization;

pub use file_header::{FileHeader, HEADER_SIZE, MAGIC};
pub use json_codec::{layout_from_json, layout_to_json};
pub use layout_file::{read_layout_file, write_layout_file};
pub use save_error::SaveError;
pub use save_plugin::{LastSaveError, LayoutSaveBuffer, LoadLayoutEvent, SaveLayoutEvent, SavePlugin};
pub use snapshot::{decode_snapshot, encode_snapshot};
