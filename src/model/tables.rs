use crate::model::labels::NutriLabel;

/// Ascending step table. A value scores the points of the first step whose
/// bound it stays strictly below, or `max_points` past the last bound.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsTable {
    pub steps: Vec<(f64, u8)>,
    pub max_points: u8,
}

impl PointsTable {
    pub fn from_steps(steps: &[(f64, u8)], max_points: u8) -> Self {
        Self {
            steps: steps.to_vec(),
            max_points,
        }
    }

    pub fn points(&self, value: f64) -> u8 {
        self.steps
            .iter()
            .find(|(bound, _)| value < *bound)
            .map(|(_, points)| *points)
            .unwrap_or(self.max_points)
    }
}

/// Inclusive upper score bounds of grades A to D; anything above `d_max` is E.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBands {
    pub a_max: i32,
    pub b_max: i32,
    pub c_max: i32,
    pub d_max: i32,
}

impl GradeBands {
    pub fn label(&self, score: i32) -> NutriLabel {
        if score <= self.a_max {
            NutriLabel::A
        } else if score <= self.b_max {
            NutriLabel::B
        } else if score <= self.c_max {
            NutriLabel::C
        } else if score <= self.d_max {
            NutriLabel::D
        } else {
            NutriLabel::E
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTables {
    pub energy: PointsTable,
    pub saturated_fat: PointsTable,
    pub sugars: PointsTable,
    pub sodium: PointsTable,
    pub protein: PointsTable,
    pub fiber: PointsTable,
    pub fruit_veg: PointsTable,
    /// Protein points are dropped when the negative score reaches this value...
    pub protein_cap_negative_min: i32,
    /// ...and the fruit/vegetable share stays below this percentage.
    pub protein_cap_fruit_veg_max: f64,
    pub bands: GradeBands,
}

impl ScoringTables {
    pub fn nutriscore_v1() -> Self {
        Self {
            energy: PointsTable::from_steps(
                &[
                    (335.0, 0),
                    (670.0, 1),
                    (1005.0, 2),
                    (1340.0, 3),
                    (1675.0, 4),
                    (2010.0, 5),
                    (2345.0, 6),
                    (2680.0, 7),
                    (3015.0, 8),
                    (3350.0, 9),
                ],
                10,
            ),
            saturated_fat: PointsTable::from_steps(
                &[
                    (1.0, 0),
                    (2.0, 1),
                    (3.0, 2),
                    (4.0, 3),
                    (5.0, 4),
                    (6.0, 5),
                    (7.0, 6),
                    (8.0, 7),
                    (9.0, 8),
                    (10.0, 9),
                ],
                10,
            ),
            sugars: PointsTable::from_steps(
                &[
                    (3.4, 0),
                    (6.8, 1),
                    (10.0, 2),
                    (14.0, 3),
                    (17.0, 4),
                    (20.0, 5),
                    (24.0, 6),
                    (27.0, 7),
                    (31.0, 8),
                    (34.0, 9),
                    (37.0, 10),
                    (41.0, 11),
                    (44.0, 12),
                    (48.0, 13),
                    (51.0, 14),
                ],
                15,
            ),
            sodium: PointsTable::from_steps(
                &[
                    (90.0, 0),
                    (180.0, 1),
                    (270.0, 2),
                    (360.0, 3),
                    (450.0, 4),
                    (540.0, 5),
                    (630.0, 6),
                    (720.0, 7),
                    (810.0, 8),
                    (900.0, 9),
                    (990.0, 10),
                    (1080.0, 11),
                    (1170.0, 12),
                    (1260.0, 13),
                    (1350.0, 14),
                    (1440.0, 15),
                    (1530.0, 16),
                    (1620.0, 17),
                    (1710.0, 18),
                    (1800.0, 19),
                ],
                20,
            ),
            protein: PointsTable::from_steps(
                &[
                    (2.4, 0),
                    (4.8, 1),
                    (7.2, 2),
                    (9.6, 3),
                    (12.0, 4),
                    (14.0, 5),
                    (17.0, 6),
                ],
                7,
            ),
            fiber: PointsTable::from_steps(
                &[(3.0, 0), (4.1, 1), (5.2, 2), (6.3, 3), (7.4, 4)],
                5,
            ),
            // The 80% step jumps straight to the maximum.
            fruit_veg: PointsTable::from_steps(&[(40.0, 0), (60.0, 1), (80.0, 2)], 5),
            protein_cap_negative_min: 11,
            protein_cap_fruit_veg_max: 80.0,
            bands: GradeBands {
                a_max: 0,
                b_max: 2,
                c_max: 10,
                d_max: 18,
            },
        }
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::nutriscore_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tables.rs"]
mod tests;
