// Licensed under MIT. See LICENSE for details.

// Log targets, filter with e.g. RUST_LOG=translate=trace.
pub const LEXER: &str = "lexer";
pub const PARSER: &str = "parser";
pub const TRANSLATE: &str = "translate";
pub const SESSION: &str = "session";
