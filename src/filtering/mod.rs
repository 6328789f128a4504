/*! Filtering utilities

Filters decide whether a piece of text is worth keeping.

Filters implement [filter::Filter]: a pure, stateless predicate
(2 successive equal inputs -> 2 equal outputs).
! */
mod content;
mod filter;

pub use content::ContentThresholds;
pub use content::MinContent;
pub use filter::Filter;
