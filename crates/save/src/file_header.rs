// ---------------------------------------------------------------------------
// file_header – Snapshot header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (28 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "CITY" (0x43495459)
//   [4..8]   Header format version (u32)
//   [8..12]  Flags (u32, reserved, always 0)
//   [12..20] Timestamp (Unix epoch, u64)
//   [20..24] Payload size (u32)
//   [24..28] xxHash32 checksum of the payload (everything after the header)
//
// On save: encode LayoutDocument -> prepend header (with checksum)
// On load: check magic -> check size -> validate checksum -> strip header

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a city layout snapshot.
pub const MAGIC: [u8; 4] = *b"CITY";

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 28;

/// Current header layout version, distinct from the document version.
pub const HEADER_FORMAT_VERSION: u32 = 1;

/// Seed for xxHash32 checksum.
const XXHASH_SEED: u32 = 0;

/// Parsed file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub timestamp: u64,
    pub payload_size: u32,
    pub checksum: u32,
}

impl FileHeader {
    /// Create a new header for the given data payload.
    pub fn new(data: &[u8]) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            format_version: HEADER_FORMAT_VERSION,
            flags: 0,
            timestamp,
            payload_size: data.len() as u32,
            checksum: xxh32(data, XXHASH_SEED),
        }
    }
}

/// Wrap an encoded payload with a file header.
///
/// Returns bytes: [header (28 bytes)] ++ [data payload].
pub fn wrap_with_header(data: &[u8]) -> Vec<u8> {
    let header = FileHeader::new(data);
    let mut out = Vec::with_capacity(HEADER_SIZE + data.len());

    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.flags.to_le_bytes());
    out.extend_from_slice(&header.timestamp.to_le_bytes());
    out.extend_from_slice(&header.payload_size.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());

    out.extend_from_slice(data);
    out
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Parse and validate the header, returning it with the payload that follows.
///
/// # Errors
///
/// - `Corrupted` if the magic is missing, the buffer is shorter than the
///   header or the recorded size, or the checksum does not match
/// - `VersionMismatch` if the header comes from a newer build
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() < 4 || bytes[..4] != MAGIC {
        return Err(SaveError::Corrupted(
            "missing CITY magic bytes, not a layout snapshot".to_string(),
        ));
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Corrupted(format!(
            "snapshot is too short ({} bytes, need at least {} for header)",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let format_version = read_u32(bytes, 4);
    let flags = read_u32(bytes, 8);
    let timestamp = u64::from_le_bytes([
        bytes[12], bytes[13], bytes[14], bytes[15], bytes[16], bytes[17], bytes[18], bytes[19],
    ]);
    let payload_size = read_u32(bytes, 20);
    let checksum = read_u32(bytes, 24);

    if format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: HEADER_FORMAT_VERSION,
            found: format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != payload_size as usize {
        return Err(SaveError::Corrupted(format!(
            "payload is {} bytes, header records {}",
            payload.len(),
            payload_size
        )));
    }

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != checksum {
        return Err(SaveError::Corrupted(format!(
            "checksum mismatch (expected {:#010X}, got {:#010X})",
            checksum, computed,
        )));
    }

    Ok((
        FileHeader {
            format_version,
            flags,
            timestamp,
            payload_size,
            checksum,
        },
        payload,
    ))
}
