//! Resolution of one compatible type for a set of candidate column types
//!
//! Used when the same column is declared with different types across sources.
//! Within a family the highest ranked type wins; ties go to the first one seen.

use crate::types::logical_type::LogicalType;

/// Find the type every candidate can be stored as
pub fn find_compatible_type(types: &[LogicalType]) -> LogicalType {
    let fallback = if types
        .iter()
        .any(|ty| matches!(ty, LogicalType::Varbinary { .. }))
    {
        LogicalType::varbinary()
    } else {
        LogicalType::varchar()
    };
    find_compatible_type_or(types, fallback)
}

/// Like [`find_compatible_type`], but with a caller-chosen type for mixes that
/// share no family
pub fn find_compatible_type_or(types: &[LogicalType], default: LogicalType) -> LogicalType {
    let Some(first) = types.first() else {
        return LogicalType::Null;
    };

    if types.iter().all(|ty| ty.same_kind(first)) {
        return first.clone();
    }

    if types.iter().all(LogicalType::is_numeric) {
        return highest_ranked(types, numeric_rank);
    }
    if types.iter().all(LogicalType::is_temporal) {
        return highest_ranked(types, temporal_rank);
    }
    if types.iter().all(LogicalType::is_large_object) {
        return highest_ranked(types, large_object_rank);
    }
    if types.iter().all(is_binary_compatible) {
        return LogicalType::varbinary();
    }

    default
}

fn highest_ranked(types: &[LogicalType], rank: fn(&LogicalType) -> u8) -> LogicalType {
    let mut best = &types[0];
    for ty in &types[1..] {
        if rank(ty) > rank(best) {
            best = ty;
        }
    }
    best.clone()
}

fn numeric_rank(ty: &LogicalType) -> u8 {
    match ty {
        LogicalType::Boolean => 1,
        LogicalType::Decimal { .. } => 4,
        ty if ty.is_integral() => 2,
        ty if ty.is_floating_point() => 3,
        _ => 0,
    }
}

fn temporal_rank(ty: &LogicalType) -> u8 {
    match ty {
        LogicalType::Date => 1,
        LogicalType::Timestamp => 2,
        _ => 0,
    }
}

fn large_object_rank(ty: &LogicalType) -> u8 {
    match ty {
        LogicalType::Varbinary { .. } => 1,
        LogicalType::Varchar { .. } => 2,
        _ => 0,
    }
}

fn is_binary_compatible(ty: &LogicalType) -> bool {
    matches!(
        ty,
        LogicalType::Varbinary { .. }
            | LogicalType::Varchar { .. }
            | LogicalType::Struct
            | LogicalType::Jsonb
    )
}
