//! Transcript parsing stages.
//!
//! The stages run leaf-first over one in-memory buffer:
//!
//! | Stage | Function | Output |
//! |-------|----------|--------|
//! | Scanner | [`scan_headers`] | header matches |
//! | Splitter | [`split_segments`] | `(header, body)` segments |
//! | Date parser | [`parse_header`] | instant or [`TimestampError`](crate::error::TimestampError) |
//! | Extractor | [`extract_author`] | author and text |
//! | Enricher | [`enrich`] | [`Calendar`](crate::event::Calendar) |
//!
//! [`TranscriptParser`](crate::TranscriptParser) assembles the results into
//! a [`Transcript`](crate::Transcript). The stages are exposed for callers
//! that need finer control, e.g. counting headers without building events.

mod author;
mod calendar;
mod date;
mod header;
mod scanner;
mod segment;

pub use author::{extract_author, is_blank};
pub use calendar::{enrich, month_name, weekday_name};
pub use date::parse_header;
pub use header::HeaderStyle;
pub use scanner::{HeaderMatch, scan_headers};
pub use segment::{RawSegment, Segments, split_segments};
