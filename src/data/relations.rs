//! Pairwise object-to-object relation aggregation

use crate::data::ocel::OcelLog;

/// Raw relation counts per object type pair, index-aligned with the pair
/// enumeration order
#[derive(Debug, Clone)]
pub struct PairMetrics {
    /// Structural relationship references between objects of the two types
    pub structural: Vec<u64>,

    /// Event-level joint participation: per event, the product of the two
    /// types' reference counts, summed over all events
    pub coparticipation: Vec<u64>,
}

/// Compute both raw metrics for every object type pair.
///
/// The structural count restricts the log to the pair's two types and counts
/// every remaining object-to-object reference, so same-type references inside
/// the restricted log are included. References to objects missing from the
/// objects table have no resolvable type and are ignored.
pub fn compute_pair_metrics(log: &OcelLog, pairs: &[(String, String)]) -> PairMetrics {
    let type_of = log.type_by_object_id();

    let mut structural = Vec::with_capacity(pairs.len());
    let mut coparticipation = Vec::with_capacity(pairs.len());

    for (type_a, type_b) in pairs {
        let (type_a, type_b) = (type_a.as_str(), type_b.as_str());
        let in_pair = |t: &str| t == type_a || t == type_b;

        let mut structural_count = 0u64;
        for object in &log.objects {
            if !in_pair(&object.object_type) {
                continue;
            }
            for reference in &object.relationships {
                match type_of.get(reference.object_id.as_str()) {
                    Some(&target_type) if in_pair(target_type) => structural_count += 1,
                    _ => {}
                }
            }
        }

        let mut coparticipation_count = 0u64;
        for event in &log.events {
            let mut refs_a = 0u64;
            let mut refs_b = 0u64;
            for reference in &event.relationships {
                match type_of.get(reference.object_id.as_str()) {
                    Some(&t) if t == type_a => refs_a += 1,
                    Some(&t) if t == type_b => refs_b += 1,
                    _ => {}
                }
            }
            coparticipation_count += refs_a * refs_b;
        }

        log::debug!(
            "({}, {}): structural={}, coparticipation={}",
            type_a,
            type_b,
            structural_count,
            coparticipation_count
        );

        structural.push(structural_count);
        coparticipation.push(coparticipation_count);
    }

    PairMetrics {
        structural,
        coparticipation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ocel::tests::SAMPLE_LOG;
    use crate::data::pairs::object_type_pairs;

    fn sample() -> (OcelLog, Vec<(String, String)>) {
        let log: OcelLog = serde_json::from_str(SAMPLE_LOG).unwrap();
        let pairs = object_type_pairs(&log.object_types());
        (log, pairs)
    }

    #[test]
    fn structural_counts_references_within_the_pair() {
        let (log, pairs) = sample();
        let metrics = compute_pair_metrics(&log, &pairs);

        // (Order, Item): o1 -> i1, o1 -> i2
        // (Order, Package): none
        // (Item, Package): p1 -> i1
        assert_eq!(metrics.structural, vec![2, 0, 1]);
    }

    #[test]
    fn coparticipation_is_per_event_product_of_reference_counts() {
        let (log, pairs) = sample();
        let metrics = compute_pair_metrics(&log, &pairs);

        // e1 references 1 Order and 2 Items; e2 references 1 Package and 1 Item.
        // (Order, Item): 1*2, (Order, Package): 0, (Item, Package): 1*1
        assert_eq!(metrics.coparticipation, vec![2, 0, 1]);
    }

    #[test]
    fn dangling_references_are_ignored() {
        let log: OcelLog = serde_json::from_str(
            r#"{
                "objects": [
                    {"id": "a1", "type": "A", "relationships": [
                        {"objectId": "ghost"}
                    ]},
                    {"id": "b1", "type": "B"}
                ],
                "events": [
                    {"id": "e1", "type": "t", "relationships": [
                        {"objectId": "a1"},
                        {"objectId": "ghost"}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        let pairs = object_type_pairs(&log.object_types());
        let metrics = compute_pair_metrics(&log, &pairs);

        assert_eq!(metrics.structural, vec![0]);
        assert_eq!(metrics.coparticipation, vec![0]);
    }

    #[test]
    fn empty_log_yields_empty_metrics() {
        let log: OcelLog = serde_json::from_str("{}").unwrap();
        let metrics = compute_pair_metrics(&log, &[]);
        assert!(metrics.structural.is_empty());
        assert!(metrics.coparticipation.is_empty());
    }
}
