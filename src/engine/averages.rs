use std::collections::HashMap;

use crate::models::{Course, MealRecord, Price};

/// Average price of the selected meals in one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseAverage {
    pub course: Course,
    pub average: Price,
    /// Number of selected meals in the course.
    pub count: usize,
}

/// Per-course average prices derived from a selection.
///
/// Entries come out in first-encounter order of each course. Callers that
/// need a particular course should use [`AveragePriceView::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AveragePriceView {
    entries: Vec<CourseAverage>,
}

impl AveragePriceView {
    pub fn get(&self, course: &str) -> Option<Price> {
        self.entries
            .iter()
            .find(|e| e.course.as_str() == course)
            .map(|e| e.average)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseAverage> {
        self.entries.iter()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.entries.iter().map(|e| &e.course)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AveragePriceView {
    type Item = &'a CourseAverage;
    type IntoIter = std::slice::Iter<'a, CourseAverage>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Group `selected_meals` by course and average each group's price.
///
/// Averages are rounded to whole cents, half away from zero. Since prices
/// are non-negative that means a value exactly between two cents rounds up.
pub fn compute_average_prices(selected_meals: &[MealRecord]) -> AveragePriceView {
    let mut index: HashMap<&Course, usize> = HashMap::new();
    let mut totals: Vec<(&Course, u128, usize)> = Vec::new();

    for meal in selected_meals {
        let slot = *index.entry(&meal.course).or_insert_with(|| {
            totals.push((&meal.course, 0, 0));
            totals.len() - 1
        });
        totals[slot].1 += u128::from(meal.price.cents());
        totals[slot].2 += 1;
    }

    let entries = totals
        .into_iter()
        .map(|(course, total_cents, count)| CourseAverage {
            course: course.clone(),
            average: Price::from_cents(round_half_up_div(total_cents, count as u128)),
            count,
        })
        .collect();

    AveragePriceView { entries }
}

/// `numerator / denominator` rounded to the nearest integer, ties upward.
///
/// Callers pass a sum of `u64` cents and its term count, so the mean fits
/// back into `u64`.
fn round_half_up_div(numerator: u128, denominator: u128) -> u64 {
    ((2 * numerator + denominator) / (2 * denominator)) as u64
}
