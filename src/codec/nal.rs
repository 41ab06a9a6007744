//! Annex B NAL unit utilities.
//!
//! NAL units are identified purely by the position of their 4-byte start
//! code; nothing here inspects the unit payloads.

use bytes::{BufMut, Bytes, BytesMut};

/// Four-byte Annex B start code delimiting NAL units.
pub const NAL_START_CODE: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

/// Builds a start-code-prefixed NAL unit from `length` payload bytes at
/// `offset` in `data`.
pub fn build_nal_unit(data: &[u8], offset: usize, length: usize) -> Bytes {
    let mut unit = BytesMut::with_capacity(NAL_START_CODE.len() + length);
    unit.put_slice(&NAL_START_CODE);
    unit.put_slice(&data[offset..offset + length]);
    unit.freeze()
}

/// Splits a buffer of start-code-prefixed NAL units at each start-code
/// occurrence.
///
/// Returns `None` when `data` does not begin with the start code. Each
/// returned unit keeps its leading start code; the final unit runs to the
/// end of the buffer.
///
/// ```
/// use demuxkit::codec::nal;
///
/// let stream = [0, 0, 0, 1, 0x67, 0xAA, 0, 0, 0, 1, 0x68];
/// let units = nal::split_nal_units(&stream).unwrap();
///
/// assert_eq!(units.len(), 2);
/// assert_eq!(&units[0][..], &[0, 0, 0, 1, 0x67, 0xAA]);
/// assert_eq!(&units[1][..], &[0, 0, 0, 1, 0x68]);
/// ```
pub fn split_nal_units(data: &[u8]) -> Option<Vec<Bytes>> {
    if data.len() < NAL_START_CODE.len() || data[..NAL_START_CODE.len()] != NAL_START_CODE {
        return None;
    }

    let mut starts = Vec::new();
    let mut current = 0;
    loop {
        starts.push(current);
        match find_nal_start_code(data, current + NAL_START_CODE.len()) {
            Some(next) => current = next,
            None => break,
        }
    }

    let mut units = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(data.len());
        units.push(Bytes::copy_from_slice(&data[start..end]));
    }
    Some(units)
}

fn find_nal_start_code(data: &[u8], from: usize) -> Option<usize> {
    data[from..]
        .windows(NAL_START_CODE.len())
        .position(|window| window == NAL_START_CODE)
        .map(|index| index + from)
}
