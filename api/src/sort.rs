//! In-memory sort helpers for the list endpoints. Ordinal comparison, stable
//! sort; only the primary key direction is reversed for descending order, the
//! tie-break stays ascending.

pub fn is_descending(order: Option<&str>) -> bool {
    order.map(|o| o.eq_ignore_ascii_case("desc")).unwrap_or(false)
}

/// Sort by a primary key with an ascending secondary tie-break.
pub fn sorted_with_tiebreak<T, K, S>(
    mut items: Vec<T>,
    descending: bool,
    primary: impl Fn(&T) -> K,
    secondary: impl Fn(&T) -> S,
) -> Vec<T>
where
    K: Ord,
    S: Ord,
{
    items.sort_by(|a, b| {
        let ord = primary(a).cmp(&primary(b));
        let ord = if descending { ord.reverse() } else { ord };
        ord.then_with(|| secondary(a).cmp(&secondary(b)))
    });
    items
}

/// Sort by a primary key alone (used for the name/client primary sorts).
pub fn sorted<T, K>(mut items: Vec<T>, descending: bool, primary: impl Fn(&T) -> K) -> Vec<T>
where
    K: Ord,
{
    items.sort_by(|a, b| {
        let ord = primary(a).cmp(&primary(b));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desc_only_applies_to_the_order_param() {
        assert!(is_descending(Some("desc")));
        assert!(is_descending(Some("DESC")));
        assert!(!is_descending(Some("descending")));
        assert!(!is_descending(Some("asc")));
        assert!(!is_descending(None));
    }

    #[test]
    fn sorts_ascending_by_default() {
        let items = vec![("b", 1), ("a", 2), ("c", 0)];
        let sorted = sorted(items, false, |i| i.0);
        assert_eq!(sorted, vec![("a", 2), ("b", 1), ("c", 0)]);
    }

    #[test]
    fn descending_reverses_primary_but_not_tiebreak() {
        let items = vec![("x", "b"), ("y", "a"), ("x", "a")];
        let sorted = sorted_with_tiebreak(items, true, |i| i.0, |i| i.1);
        assert_eq!(sorted, vec![("y", "a"), ("x", "a"), ("x", "b")]);
    }

    #[test]
    fn equal_keys_keep_tiebreak_order() {
        let items = vec![(1, "c"), (1, "a"), (0, "z")];
        let sorted = sorted_with_tiebreak(items, false, |i| i.0, |i| i.1);
        assert_eq!(sorted, vec![(0, "z"), (1, "a"), (1, "c")]);
    }
}
