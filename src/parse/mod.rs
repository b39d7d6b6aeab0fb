pub mod line;
pub mod types;
pub mod unescape;
pub mod validate;

pub use line::{classify, extract, Line};
pub use types::{CanonicalAssignment, QuoteKind, RawAssignment};
pub use unescape::unescape;
pub use validate::{is_legal_name, is_legal_value};
