pub mod queries;
pub mod ranking;
pub mod stats;
pub mod subjects;
pub mod views;
pub mod weighted;

pub use queries::{below_in_any, distinction_pair, filter_by_subject, PairDistinction, SubjectFilter};
pub use ranking::{rank_students, RankedStudent};
pub use stats::{describe, ColumnStats, Descriptives, RowStats};
pub use subjects::{analyze_subjects, SubjectBreakdown};
pub use views::{matrix_views, MatrixViews};
pub use weighted::{weighted_scores, WeightedReport, WeightedScore};
