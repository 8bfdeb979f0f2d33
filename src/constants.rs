//! Constants shared across the crate.

/// Default token of the positive label.
pub const DEFAULT_POSITIVE: &str = "1";
/// Default token of the negative label.
pub const DEFAULT_NEGATIVE: &str = "2";

/// Default prefix of the generated category codes.
pub const DEFAULT_CODE_PREFIX: &str = "A";

/// Edge token of the root node.
pub const ROOT_TOKEN: &str = "Root";
/// Edge token of the `value <= threshold` side of a numeric split.
pub const LOW_TOKEN: &str = "A";
/// Edge token of the `value > threshold` side of a numeric split.
pub const HIGH_TOKEN: &str = "B";

pub(crate) const INDENT_WIDTH: usize = 2;
