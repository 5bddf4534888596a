pub mod formatter;

pub use formatter::{
    format_basic_analytics, format_below_in_any, format_matrix_views, format_names,
    format_pair_distinction, format_ranking, format_ranking_tsv, format_subject_analysis,
    format_subject_filter, format_weighted, should_use_colors, terminal_width, MENU, NONE_SENTINEL,
};
