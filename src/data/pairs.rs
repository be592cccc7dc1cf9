//! Object type pair enumeration

use itertools::Itertools;

/// All 2-combinations of the distinct object types, in the stable order the
/// types were supplied in. The relation aggregator and the graph builder both
/// index their per-pair arrays against this ordering.
pub fn object_type_pairs(types: &[String]) -> Vec<(String, String)> {
    types.iter().cloned().tuple_combinations().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn enumerates_all_two_combinations_in_order() {
        let pairs = object_type_pairs(&types(&["Order", "Item", "Package"]));
        assert_eq!(
            pairs,
            vec![
                ("Order".to_string(), "Item".to_string()),
                ("Order".to_string(), "Package".to_string()),
                ("Item".to_string(), "Package".to_string()),
            ]
        );
    }

    #[test]
    fn fewer_than_two_types_yield_no_pairs() {
        assert!(object_type_pairs(&types(&["Order"])).is_empty());
        assert!(object_type_pairs(&[]).is_empty());
    }
}
