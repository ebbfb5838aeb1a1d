//! H.264 RTP packetization driver (RFC 6184).
//!
//! Consumes a sequence of NAL units and dispatches each to the Single NAL
//! Unit, FU-A fragmentation, or STAP-A aggregation path depending on its
//! size and what fits alongside it. This single driver backs both the
//! codec-driven egress path ([`Packetizer::packetize_frame`]) and the
//! pass-through path ([`Packetizer::packetize_annex_b`]) — the two only
//! differ in where their NAL-unit sequence comes from.

mod aggregation;
mod fragmentation;

use crate::constants::PACKET_MAX;
use crate::error::CodecError;
use crate::scanner::scan;
use logging::Logger;

/// The out-of-scope codec collaborator this crate packetizes output from.
///
/// The real H.264 encoder lives outside this crate; callers implement this
/// trait over whatever encoder they use.
pub trait H264Encoder {
    fn encode(&mut self, frame_bytes: &[u8], force_keyframe: bool) -> Result<EncodedFrame, CodecError>;
}

/// Result of a single codec encode call.
pub struct EncodedFrame {
    /// Annex B byte-stream containing the encoded frame's NAL units.
    pub annex_b: Vec<u8>,
    /// Presentation timestamp, already converted to the 90 kHz RTP video clock.
    pub timestamp: u32,
}

/// Splits Annex B byte-streams into RTP payloads.
///
/// Holds no per-call state; `packet_max` bounds every payload it emits and
/// an optional [`Logger`] is consulted only when the codec collaborator
/// fails during [`Packetizer::packetize_frame`].
pub struct Packetizer {
    packet_max: usize,
    logger: Option<Logger>,
}

impl Packetizer {
    pub fn new() -> Self {
        Packetizer {
            packet_max: PACKET_MAX,
            logger: None,
        }
    }

    /// Overrides the default MTU-bound payload size. Mostly useful in tests.
    pub fn with_packet_max(packet_max: usize) -> Self {
        Packetizer {
            packet_max,
            logger: None,
        }
    }

    /// Attaches a logger used to report codec encode failures.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Encodes `frame_bytes` through `codec` and packetizes the result.
    ///
    /// On codec failure, logs a warning (if a logger is attached), returns
    /// no payloads and a timestamp of zero, and otherwise continues as if
    /// nothing happened — the caller is expected to simply skip the frame.
    pub fn packetize_frame(
        &self,
        codec: &mut dyn H264Encoder,
        frame_bytes: &[u8],
        force_keyframe: bool,
    ) -> (Vec<Vec<u8>>, u32) {
        match codec.encode(frame_bytes, force_keyframe) {
            Ok(frame) => {
                let payloads = packetize_nals(scan(&frame.annex_b), self.packet_max);
                (payloads, frame.timestamp)
            }
            Err(err) => {
                if let Some(logger) = &self.logger {
                    logger.warn(&format!("h264 encode failed, dropping frame: {}", err));
                }
                (Vec::new(), 0)
            }
        }
    }

    /// Packetizes an already-encoded Annex B buffer directly, bypassing any codec.
    pub fn packetize_annex_b(&self, buf: &[u8], timestamp: u32) -> (Vec<Vec<u8>>, u32) {
        let payloads = packetize_nals(scan(buf), self.packet_max);
        (payloads, timestamp)
    }
}

impl Default for Packetizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a NAL-unit sequence into a list of RTP payloads.
///
/// Shared by the codec-backed and pass-through packetization paths; neither
/// knows or cares how its NAL units were produced.
fn packetize_nals<'a>(mut nals: impl Iterator<Item = &'a [u8]>, packet_max: usize) -> Vec<Vec<u8>> {
    let mut payloads = Vec::new();
    let mut cur = nals.next();

    while let Some(nal) = cur {
        if nal.is_empty() {
            cur = nals.next();
        } else if nal.len() > packet_max {
            payloads.extend(fragmentation::fragment_fu_a(nal, packet_max));
            cur = nals.next();
        } else {
            let (payload, next) = aggregation::aggregate(nal, &mut nals, packet_max);
            payloads.push(payload);
            cur = next;
        }
    }

    payloads
}
