//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets, ranges, and expected constants (source of truth)
//! - `reader`: safe byte access and protocol conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; sockets and dispatch live in the
//! `source`, `osc`, and `bridge` layers.

pub mod sacn;
