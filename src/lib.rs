//! Incremental bencode decoding tools.

/// Bencode value model and incremental decoder.
pub mod bencode;
