//! H.264 RTP Payload Engine (RFC 6184)
//!
//! Bridges an H.264 Annex B byte-stream and the RTP payload format: Single
//! NAL Unit, STAP-A aggregation, and FU-A fragmentation on the way out;
//! parsing of all three back into Annex B fragments on the way in.
//!
//! This crate does not implement the H.264 codec itself, the RTP transport
//! layer, or configuration loading — see [`packetizer::H264Encoder`] for the
//! seam a real encoder hangs on.

pub mod constants;
pub mod depacketizer;
pub mod error;
pub mod packetizer;
pub mod scanner;

pub use depacketizer::{depayload, parse_payload_descriptor, PayloadDescriptor};
pub use error::{CodecError, PayloadError, Result};
pub use packetizer::{EncodedFrame, H264Encoder, Packetizer};
pub use scanner::{scan, NalUnits};
