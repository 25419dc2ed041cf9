//! Terminal display and formatting utilities.
//!
//! Handles JSON rendering of decoded payloads and token expiry
//! status lines for human-readable terminal output.

pub mod json_printer;
pub mod token_status;
