//! H.264 RTP payload parsing (RFC 6184).
//!
//! Reconstructs the Annex B fragment carried by a single RTP payload.
//! Reassembly across FU-A fragments is left to the caller; this module
//! only reports, via [`PayloadDescriptor::first_fragment`], whether a given
//! payload starts a new NAL unit.

use crate::constants::{NAL_START_CODE_4, NAL_TYPE_FU_A, NAL_TYPE_STAP_A};
use crate::error::{PayloadError, Result};

/// Classification of a single parsed RTP payload.
#[derive(Debug, PartialEq, Eq)]
pub struct PayloadDescriptor {
    /// True for Single NAL, STAP-A, and the first FU-A fragment of a NAL;
    /// false for middle/end FU-A fragments.
    pub first_fragment: bool,
}

/// Parses `payload` and returns its descriptor alongside the reconstructed
/// Annex B bytes. A length of less than 2 bytes is rejected unconditionally,
/// before any type-specific parsing is attempted.
pub fn parse_payload_descriptor(payload: &[u8]) -> Result<(PayloadDescriptor, Vec<u8>)> {
    if payload.len() < 2 {
        return Err(PayloadError::ShortNal);
    }

    let nal_type = payload[0] & 0x1F;

    match nal_type {
        1..=23 => {
            let mut out = Vec::with_capacity(NAL_START_CODE_4.len() + payload.len());
            out.extend_from_slice(NAL_START_CODE_4);
            out.extend_from_slice(payload);
            Ok((PayloadDescriptor { first_fragment: true }, out))
        }
        t if t == NAL_TYPE_FU_A => parse_fu_a(payload),
        t if t == NAL_TYPE_STAP_A => parse_stap_a(payload),
        other => Err(PayloadError::UnsupportedNalType(other)),
    }
}

/// Convenience wrapper over [`parse_payload_descriptor`] for callers that
/// only need the Annex B bytes.
pub fn depayload(payload: &[u8]) -> Result<Vec<u8>> {
    parse_payload_descriptor(payload).map(|(_, bytes)| bytes)
}

fn parse_fu_a(payload: &[u8]) -> Result<(PayloadDescriptor, Vec<u8>)> {
    let fu_indicator = payload[0];
    let fu_header = payload[1];
    let start = fu_header & 0x80 != 0;
    let original_type = fu_header & 0x1F;

    let mut out = Vec::new();
    if start {
        out.extend_from_slice(NAL_START_CODE_4);
        let nal_header = (fu_indicator & 0xE0) | original_type;
        out.push(nal_header);
    }
    out.extend_from_slice(&payload[2..]);

    Ok((PayloadDescriptor { first_fragment: start }, out))
}

fn parse_stap_a(payload: &[u8]) -> Result<(PayloadDescriptor, Vec<u8>)> {
    let mut out = Vec::new();
    let mut pos = 1;

    while pos < payload.len() {
        if payload.len() < pos + 2 {
            return Err(PayloadError::TruncatedStapLength);
        }
        let len = u16::from_be_bytes([payload[pos], payload[pos + 1]]) as usize;
        pos += 2;

        if payload.len() < pos + len {
            return Err(PayloadError::TruncatedStapData);
        }

        out.extend_from_slice(NAL_START_CODE_4);
        out.extend_from_slice(&payload[pos..pos + len]);
        pos += len;
    }

    Ok((PayloadDescriptor { first_fragment: true }, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_nal() {
        let payload = [0x67, 0x42, 0x00, 0x1E];
        let (desc, bytes) = parse_payload_descriptor(&payload).unwrap();
        assert!(desc.first_fragment);
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E]);
    }

    #[test]
    fn test_short_nal_rejected() {
        let payload = [0x67];
        assert_eq!(parse_payload_descriptor(&payload), Err(PayloadError::ShortNal));
    }

    #[test]
    fn test_fu_a_reassembly() {
        let fu_indicator = 0x7C; // NRI=3, type 28
        let start = vec![fu_indicator, 0x85, 0xAA, 0xBB]; // start bit, type 5
        let middle = vec![fu_indicator, 0x05, 0xCC];
        let end = vec![fu_indicator, 0x45, 0xDD];

        let (d1, b1) = parse_payload_descriptor(&start).unwrap();
        assert!(d1.first_fragment);
        assert_eq!(b1, vec![0x00, 0x00, 0x00, 0x01, 0x65, 0xAA, 0xBB]);

        let (d2, b2) = parse_payload_descriptor(&middle).unwrap();
        assert!(!d2.first_fragment);
        assert_eq!(b2, vec![0xCC]);

        let (d3, b3) = parse_payload_descriptor(&end).unwrap();
        assert!(!d3.first_fragment);
        assert_eq!(b3, vec![0xDD]);

        let mut reassembled = b1;
        reassembled.extend(b2);
        reassembled.extend(b3);
        assert_eq!(reassembled, vec![0x00, 0x00, 0x00, 0x01, 0x65, 0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_stap_a_two_nals() {
        let payload = [0x78, 0x00, 0x02, 0x67, 0xAA, 0x00, 0x02, 0x68, 0xBB];
        let (desc, bytes) = parse_payload_descriptor(&payload).unwrap();
        assert!(desc.first_fragment);
        assert_eq!(
            bytes,
            vec![0, 0, 0, 1, 0x67, 0xAA, 0, 0, 0, 1, 0x68, 0xBB]
        );
    }

    #[test]
    fn test_stap_a_truncated_data() {
        let payload = [0x78, 0x00, 0x05, 0x67, 0xAA];
        assert_eq!(
            parse_payload_descriptor(&payload),
            Err(PayloadError::TruncatedStapData)
        );
    }

    #[test]
    fn test_unsupported_type() {
        let payload = [0x19, 0x00, 0x00];
        assert_eq!(
            parse_payload_descriptor(&payload),
            Err(PayloadError::UnsupportedNalType(25))
        );
    }
}
