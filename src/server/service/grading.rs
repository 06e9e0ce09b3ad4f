//! Grade weighting, averages and dropout-risk scoring.
//!
//! Everything here is pure arithmetic over rows already loaded by the services, so the
//! same rules apply whichever database backs the repositories.

use std::collections::HashMap;
use uuid::Uuid;

use crate::model::{assessment::GradeStanding, course::RiskCategory, home::GradeDistributionDto};

/// Lowest grade a student can receive.
pub const MIN_GRADE: f64 = 1.0;
/// Highest grade a student can receive.
pub const MAX_GRADE: f64 = 7.0;
/// An average strictly above this passes.
pub const PASSING_AVERAGE: f64 = 4.0;

/// Coefficient applied to grades of an evaluation kind.
///
/// `solemne` and `coef2` count double; every other kind counts once.
pub fn evaluation_weight(kind: &str) -> f64 {
    match kind.trim().to_lowercase().as_str() {
        "solemne" | "coef2" => 2.0,
        _ => 1.0,
    }
}

/// Rounds to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted mean of `(value, weight)` pairs, rounded to two decimals.
///
/// # Returns
/// - `Some(f64)` - At least one pair with a positive total weight
/// - `None` - No grades
pub fn weighted_average(grades: &[(f64, f64)]) -> Option<f64> {
    let total_weight: f64 = grades.iter().map(|(_, w)| w).sum();
    if grades.is_empty() || total_weight <= 0.0 {
        return None;
    }

    let sum: f64 = grades.iter().map(|(v, w)| v * w).sum();
    Some(round2(sum / total_weight))
}

/// Arithmetic mean rounded to two decimals; `None` when empty.
pub fn simple_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(round2(values.iter().sum::<f64>() / values.len() as f64))
}

/// Course average as the mean of per-student averages.
pub fn course_average<'a>(student_averages: impl IntoIterator<Item = &'a f64>) -> Option<f64> {
    let values: Vec<f64> = student_averages.into_iter().copied().collect();
    simple_average(&values)
}

pub fn is_approved(average: f64) -> bool {
    average > PASSING_AVERAGE
}

pub fn count_approved<'a>(student_averages: impl IntoIterator<Item = &'a f64>) -> u64 {
    student_averages.into_iter().filter(|a| is_approved(**a)).count() as u64
}

/// Buckets student averages into excellent, good, regular and insufficient.
pub fn distribution<'a>(student_averages: impl IntoIterator<Item = &'a f64>) -> GradeDistributionDto {
    let mut dist = GradeDistributionDto::default();
    for &average in student_averages {
        if average >= 6.0 {
            dist.excellent += 1;
        } else if average >= 5.0 {
            dist.good += 1;
        } else if average >= 4.0 {
            dist.regular += 1;
        } else {
            dist.insufficient += 1;
        }
    }
    dist
}

pub fn standing(average: Option<f64>) -> GradeStanding {
    match average {
        Some(a) if a >= 6.0 => GradeStanding::Excelente,
        Some(a) if a >= 5.0 => GradeStanding::Bueno,
        Some(a) if a >= 4.0 => GradeStanding::Regular,
        _ => GradeStanding::Insuficiente,
    }
}

/// Share of present records as a whole percentage; 0 without records.
pub fn attendance_percent(present: u64, total: u64) -> i64 {
    if total == 0 {
        return 0;
    }

    (present as f64 / total as f64 * 100.0).round() as i64
}

/// Dropout risk from 0 to 100 combining grades (60%) and absence (40%).
///
/// # Arguments
/// - `average` - Student average, falling back to the course average, then 0
/// - `attendance` - Attendance percentage from [`attendance_percent`]
pub fn risk_score(average: f64, attendance: i64) -> i64 {
    let risk_average = (MAX_GRADE - average) / 6.0 * 100.0;
    let risk_attendance = 100.0 - attendance as f64;

    (0.6 * risk_average + 0.4 * risk_attendance).round() as i64
}

/// Buckets a risk score, escalating one level when attendance is below 60%.
pub fn risk_category(score: i64, attendance: i64) -> RiskCategory {
    let base = if score <= 25 {
        RiskCategory::Bajo
    } else if score <= 60 {
        RiskCategory::Medio
    } else if score <= 90 {
        RiskCategory::Alto
    } else {
        RiskCategory::Critico
    };

    if attendance >= 60 {
        return base;
    }

    match base {
        RiskCategory::Bajo => RiskCategory::Medio,
        RiskCategory::Medio => RiskCategory::Alto,
        RiskCategory::Alto | RiskCategory::Critico => RiskCategory::Critico,
    }
}

/// Weighted average per student over the given grades.
///
/// # Arguments
/// - `grades` - Grades in scope
/// - `kinds` - Evaluation kind by evaluation id; unknown evaluations weigh 1
pub fn weighted_student_averages(
    grades: &[entity::grade::Model],
    kinds: &HashMap<Uuid, String>,
) -> HashMap<Uuid, f64> {
    let mut per_student: HashMap<Uuid, Vec<(f64, f64)>> = HashMap::new();
    for grade in grades {
        let weight = kinds
            .get(&grade.evaluation_id)
            .map(|k| evaluation_weight(k))
            .unwrap_or(1.0);
        per_student
            .entry(grade.student_vinculo_id)
            .or_default()
            .push((grade.value, weight));
    }

    per_student
        .into_iter()
        .filter_map(|(student, pairs)| weighted_average(&pairs).map(|avg| (student, avg)))
        .collect()
}

/// Simple average per student over the given grades.
pub fn simple_student_averages(grades: &[entity::grade::Model]) -> HashMap<Uuid, f64> {
    let mut per_student: HashMap<Uuid, Vec<f64>> = HashMap::new();
    for grade in grades {
        per_student
            .entry(grade.student_vinculo_id)
            .or_default()
            .push(grade.value);
    }

    per_student
        .into_iter()
        .filter_map(|(student, values)| simple_average(&values).map(|avg| (student, avg)))
        .collect()
}
