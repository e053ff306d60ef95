//! Text buffer bookkeeping shared by the rich text models

pub mod intervals;
pub mod range;
pub mod span;
pub mod table;

pub use intervals::SpanList;
pub use range::StringRange;
pub use span::Span;
pub use table::{ClassTable, StyleId};
