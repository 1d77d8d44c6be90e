use std::cmp::Ordering;

use shared::domain::{Breed, SortDirection, SortOption};

/// Produces a freshly ordered copy of `breeds`; the input is never mutated.
///
/// Name compares case-insensitively; height and lifespan compare on the
/// leading integer of their free-text fields, with parse failures pinned to
/// 0 so malformed entries sort deterministically instead of poisoning the
/// whole ordering. The sort is stable: equal keys keep their input order in
/// both directions, because descending reverses the comparator rather than
/// the output.
pub fn sort_breeds(breeds: &[Breed], option: SortOption, direction: SortDirection) -> Vec<Breed> {
    let mut sorted = breeds.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match option {
            SortOption::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::Height => {
                leading_int(&a.height.imperial).cmp(&leading_int(&b.height.imperial))
            }
            SortOption::Lifespan => leading_int(&a.life_span).cmp(&leading_int(&b.life_span)),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Parses the leading base-10 integer of `text`: optional leading
/// whitespace, optional sign, then digits, ignoring any trailing garbage
/// ("23 - 29" parses as 23). Returns 0 when no digits lead the text.
fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else { break };
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if seen {
        sign * value
    } else {
        0
    }
}
