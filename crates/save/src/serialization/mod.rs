// ---------------------------------------------------------------------------
// Serialization: document types re-exported for codecs, tools and benches
// ---------------------------------------------------------------------------
//
// `LayoutDocument` and its parts are the stable on-disk shape. The JSON codec
// writes them as text and the snapshot codec writes them as bitcode behind a
// checksummed header.

pub use crate::save_types::*;

#[cfg(test)]
mod tests_json_roundtrip;
#[cfg(test)]
mod tests_json_format;
#[cfg(test)]
mod tests_save_plugin;
#[cfg(test)]
mod tests_snapshot;
