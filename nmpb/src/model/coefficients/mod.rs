mod coefficient_table;
mod speed_bracket;

pub use coefficient_table::{
    bracket_ranges, coefficient_table, coefficient_tables, lookup, validate_tables,
    CoefficientTableEntry,
};
pub use speed_bracket::SpeedBracket;
