//! Wire-visible constants for RFC 6184 H.264 RTP packetization.

/// Maximum size, in bytes, of a single RTP payload this crate will emit.
pub const PACKET_MAX: usize = 1300;

/// NAL unit type for a Fragmentation Unit (RFC 6184 Section 5.8).
pub const NAL_TYPE_FU_A: u8 = 28;

/// NAL unit type for a Single-Time Aggregation Packet (RFC 6184 Section 5.7.1).
pub const NAL_TYPE_STAP_A: u8 = 24;

/// Upper bound of frame rates this crate's timestamp arithmetic is tuned for.
pub const MAX_FRAME_RATE: u32 = 30;

/// RTP clock rate for H.264 video (RFC 6184 Section 8.2.1).
pub const RTP_VIDEO_CLOCK_RATE: u32 = 90_000;

/// Four-byte Annex B start code, used for all start codes this crate writes.
pub const NAL_START_CODE_4: &[u8] = &[0x00, 0x00, 0x00, 0x01];

/// Three-byte Annex B start code, recognized on input only.
pub const NAL_START_CODE_3: &[u8] = &[0x00, 0x00, 0x01];
