//! Binary snapshot: checksummed header + bitcode-encoded `LayoutDocument`.

use generation::CityLayout;

use crate::file_header::{unwrap_header, wrap_with_header};
use crate::json_codec::check_version;
use crate::save_error::SaveError;
use crate::save_types::LayoutDocument;

pub fn encode_snapshot(layout: &CityLayout) -> Result<Vec<u8>, SaveError> {
    if !layout.is_generated() {
        return Err(SaveError::NoData);
    }
    let payload = bitcode::encode(&LayoutDocument::from_layout(layout));
    Ok(wrap_with_header(&payload))
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<CityLayout, SaveError> {
    let (_header, payload) = unwrap_header(bytes)?;
    let doc: LayoutDocument = bitcode::decode(payload)?;
    check_version(&doc)?;
    Ok(doc.into_layout())
}
