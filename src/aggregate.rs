//! Aggregation over recycling records: per-user totals and the leaderboard.

use std::collections::HashMap;

use crate::models::{MaterialSubtotal, RankingEntry};
use crate::points::{compute_points, RawQuantity};

/// Totals derived from one user's records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub points: i64,
    pub kg: f64,
}

/// Sum points and kilograms over a user's (material, quantity) lines.
///
/// An unparsable quantity contributes 0 to both sums without aborting the
/// rest of the summation.
pub fn user_totals(records: &[(String, RawQuantity)]) -> Totals {
    let mut totals = Totals { points: 0, kg: 0.0 };
    for (material, quantity) in records {
        totals.points += compute_points(Some(material.as_str()), quantity);
        if let Some(kg) = quantity.as_kg() {
            totals.kg += kg;
        }
    }
    totals
}

/// Build the leaderboard from per (user, material) quantity subtotals.
///
/// Each subtotal converts to points through the calculator and sums per
/// user. Ordering is points descending; the sort is stable, so ties keep
/// the order in which a user's first subtotal was encountered. Users with
/// no records have no subtotals and therefore never appear.
pub fn build_ranking(
    subtotals: &[MaterialSubtotal],
    names: &HashMap<i64, String>,
) -> Vec<RankingEntry> {
    let mut order: Vec<i64> = Vec::new();
    let mut points_by_user: HashMap<i64, i64> = HashMap::new();

    for row in subtotals {
        let points = compute_points(Some(row.material.as_str()), &row.total_quantity.into());
        match points_by_user.get_mut(&row.user_id) {
            Some(total) => *total += points,
            None => {
                order.push(row.user_id);
                points_by_user.insert(row.user_id, points);
            }
        }
    }

    let mut ranking: Vec<RankingEntry> = order
        .into_iter()
        .map(|user_id| RankingEntry {
            user_id,
            name: names
                .get(&user_id)
                .cloned()
                .unwrap_or_else(|| format!("Usuario {user_id}")),
            points: points_by_user[&user_id],
        })
        .collect();

    ranking.sort_by(|a, b| b.points.cmp(&a.points));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtotal(user_id: i64, material: &str, kg: f64) -> MaterialSubtotal {
        MaterialSubtotal {
            user_id,
            material: material.to_string(),
            total_quantity: kg,
        }
    }

    fn names(pairs: &[(i64, &str)]) -> HashMap<i64, String> {
        pairs.iter().map(|(id, n)| (*id, n.to_string())).collect()
    }

    #[test]
    fn totals_ignore_unparsable_quantities() {
        let records = vec![
            ("papel".to_string(), RawQuantity::Text("3".to_string())),
            ("vidrio".to_string(), RawQuantity::Text("bad".to_string())),
        ];
        let totals = user_totals(&records);
        assert_eq!(totals.points, 24);
        assert_eq!(totals.kg, 3.0);
    }

    #[test]
    fn totals_sum_across_materials() {
        let records = vec![
            ("metal".to_string(), RawQuantity::Number(2.0)),
            ("plastico".to_string(), RawQuantity::Number(1.5)),
        ];
        let totals = user_totals(&records);
        assert_eq!(totals.points, 24 + 15);
        assert_eq!(totals.kg, 3.5);
    }

    #[test]
    fn empty_record_set_is_zero() {
        let totals = user_totals(&[]);
        assert_eq!(totals.points, 0);
        assert_eq!(totals.kg, 0.0);
    }

    #[test]
    fn ranking_sorts_by_points_descending() {
        let subtotals = vec![subtotal(1, "metal", 2.0), subtotal(2, "papel", 1.0)];
        let names = names(&[(1, "Ana"), (2, "Beto")]);

        let ranking = build_ranking(&subtotals, &names);
        assert_eq!(ranking.len(), 2);
        assert_eq!(
            (ranking[0].user_id, ranking[0].name.as_str(), ranking[0].points),
            (1, "Ana", 24)
        );
        assert_eq!(
            (ranking[1].user_id, ranking[1].name.as_str(), ranking[1].points),
            (2, "Beto", 8)
        );
    }

    #[test]
    fn ranking_sums_materials_per_user() {
        let subtotals = vec![
            subtotal(7, "papel", 1.0),
            subtotal(7, "vidrio", 2.0),
            subtotal(8, "metal", 1.0),
        ];
        let ranking = build_ranking(&subtotals, &names(&[(7, "Carla"), (8, "Dani")]));
        assert_eq!(ranking[0].points, 18);
        assert_eq!(ranking[0].user_id, 7);
        assert_eq!(ranking[1].points, 12);
    }

    #[test]
    fn unknown_user_gets_synthetic_label() {
        let subtotals = vec![subtotal(42, "papel", 1.0)];
        let ranking = build_ranking(&subtotals, &HashMap::new());
        assert_eq!(ranking[0].name, "Usuario 42");
    }

    #[test]
    fn users_without_records_are_excluded() {
        let subtotals = vec![subtotal(1, "metal", 1.0)];
        let ranking = build_ranking(&subtotals, &names(&[(1, "Ana"), (2, "Beto")]));
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].user_id, 1);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let subtotals = vec![
            subtotal(3, "papel", 1.0),
            subtotal(4, "papel", 1.0),
            subtotal(5, "metal", 1.0),
        ];
        let ranking = build_ranking(&subtotals, &names(&[(3, "A"), (4, "B"), (5, "C")]));
        assert_eq!(ranking[0].user_id, 5);
        assert_eq!(ranking[1].user_id, 3);
        assert_eq!(ranking[2].user_id, 4);
    }

    #[test]
    fn ranking_is_deterministic_for_same_input() {
        let subtotals = vec![
            subtotal(1, "metal", 2.0),
            subtotal(2, "papel", 1.0),
            subtotal(1, "vidrio", 4.0),
        ];
        let names = names(&[(1, "Ana"), (2, "Beto")]);
        let first = build_ranking(&subtotals, &names);
        let second = build_ranking(&subtotals, &names);
        assert_eq!(first, second);
    }
}
