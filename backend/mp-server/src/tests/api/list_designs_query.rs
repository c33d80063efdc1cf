use crate::{DEFAULT_DESIGN_LIMIT, ListDesignsQuery};

#[test]
fn test_missing_limit_uses_default() {
    let query = ListDesignsQuery::default();
    assert_eq!(query.effective_limit(), DEFAULT_DESIGN_LIMIT);
}

#[test]
fn test_zero_limit_uses_default() {
    let query = ListDesignsQuery { limit: Some(0) };
    assert_eq!(query.effective_limit(), 50);
}

#[test]
fn test_positive_limit_used_as_is() {
    let query = ListDesignsQuery { limit: Some(2) };
    assert_eq!(query.effective_limit(), 2);
}

#[test]
fn test_negative_limit_counts_by_magnitude() {
    let query = ListDesignsQuery { limit: Some(-3) };
    assert_eq!(query.effective_limit(), 3);
}

#[test]
fn test_most_negative_limit_does_not_overflow() {
    let query = ListDesignsQuery {
        limit: Some(i64::MIN),
    };
    assert_eq!(query.effective_limit(), 1u64 << 63);
}
