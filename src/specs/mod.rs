//! # Input formats
//!
//! Each module here knows how to read one kind of source document and turn it
//! into `model` types. Nothing in here touches the network or the file system.
//!
//! - `lists` – candidate list text files, one format per election era
//!   (`Plain` headers before 2019, `Nr. <n> <name>` headers since).
//! - `application` – the disclosure report CSV returned per name query,
//!   narrowed to the candidate's list.
//!
//! Parsers are tolerant: a line or row they cannot read is logged and skipped,
//! never fatal.
pub mod application;
pub mod lists;
