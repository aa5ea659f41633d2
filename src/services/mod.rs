//! Service layer for the conversion pipeline.
//!
//! The mapper is a pure function; the conversion service coordinates loader,
//! mapper and exporter against one profile registry snapshot.

pub mod conversion;
pub mod mapper;

pub use conversion::ConversionService;
pub use mapper::{map_active_map, map_bar};
