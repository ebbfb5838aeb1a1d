//! FU-A fragmentation (RFC 6184 Section 5.8).
//!
//! ```text
//! FU Indicator (1 byte):        FU Header (1 byte):
//!  0 1 2 3 4 5 6 7               0 1 2 3 4 5 6 7
//! +-+-+-+-+-+-+-+-+             +-+-+-+-+-+-+-+-+
//! |F|NRI|  Type   |             |S|E|R|  Type   |
//! +-+-+-+-+-+-+-+-+             +-+-+-+-+-+-+-+-+
//! ```
//! Type is 28 in the indicator; R is always 0 in the header.

use crate::constants::NAL_TYPE_FU_A;

/// Splits a single NAL unit too large for one RTP packet into an ordered
/// list of FU-A payloads, each bounded by `packet_max`.
///
/// `nal` must include its original one-byte NAL header. Load is balanced
/// across fragments so no fragment is more than one byte larger than any
/// other.
pub fn fragment_fu_a(nal: &[u8], packet_max: usize) -> Vec<Vec<u8>> {
    let nal_header = nal[0];
    let payload = &nal[1..];
    let payload_size = payload.len();

    let available = packet_max - 2;
    let num_packets = payload_size.div_ceil(available);
    let base = payload_size / num_packets;
    let extra = payload_size % num_packets;

    let fu_indicator = (nal_header & 0xE0) | NAL_TYPE_FU_A;
    let original_type = nal_header & 0x1F;

    let mut packets = Vec::with_capacity(num_packets);
    let mut cursor = 0;
    let mut emitted = 0usize;

    for i in 0..num_packets {
        let chunk_size = if i < extra { base + 1 } else { base };
        let chunk = &payload[cursor..cursor + chunk_size];
        cursor += chunk_size;
        emitted += chunk_size;

        let is_start = i == 0;
        let is_end = i == num_packets - 1;
        let mut fu_header = original_type;
        if is_start {
            fu_header |= 0x80;
        }
        if is_end {
            fu_header |= 0x40;
        }

        let mut out = Vec::with_capacity(2 + chunk.len());
        out.push(fu_indicator);
        out.push(fu_header);
        out.extend_from_slice(chunk);
        packets.push(out);
    }

    assert_eq!(emitted, payload_size, "FU-A fragments must cover the whole NAL payload");

    packets
}
