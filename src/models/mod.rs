//! Balancing domain models.
//!
//! Provides the data types that flow through the sampling pipeline.
//!
//! | Type | Role |
//! |------|------|
//! | `Candidate` | One assignment of every entity to a group |
//! | `Batch` | Ordered collection of candidates |
//! | `ScoredCandidate` | Valid candidate plus its score |
//! | `GroupSummary` | Per-group weights and members for a chosen candidate |

mod batch;
mod candidate;
mod summary;

pub use batch::Batch;
pub use candidate::{Candidate, GroupId, ScoredCandidate};
pub use summary::GroupSummary;
