//! Category Tally Module
//! Counts rows per category label and computes guarded percentages.

use std::collections::HashMap;

/// Per-category row counts, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every present label; missing cells are not counted.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for label in labels.into_iter().flatten() {
            tally.add(label.as_ref(), 1);
        }
        tally
    }

    /// Add `count` rows to a category, creating it if needed.
    pub fn add(&mut self, label: &str, count: usize) {
        match self.index.get(label) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), count));
            }
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Categories by descending count; ties keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<(String, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Categories in a fixed display order.
    ///
    /// Every label in `order` is present (with zero when unseen); categories
    /// not named in `order` follow by descending count.
    pub fn ordered_by(&self, order: &[&str]) -> Vec<(String, usize)> {
        let mut ordered: Vec<(String, usize)> = order
            .iter()
            .map(|label| (label.to_string(), self.get(label)))
            .collect();

        ordered.extend(
            self.sorted_desc()
                .into_iter()
                .filter(|(label, _)| !order.contains(&label.as_str())),
        );
        ordered
    }
}

/// Percentage of `part` over `whole`; `None` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64 * 100.0)
    }
}

/// Render `part` with its share of `whole`, e.g. `40 (40.00%)`.
pub fn format_share(part: usize, whole: usize) -> String {
    match percentage(part, whole) {
        Some(pct) => format!("{} ({:.2}%)", part, pct),
        None => format!("{} (percentual indefinido)", part),
    }
}

/// Like [`format_share`] with the population named after the percentage,
/// e.g. `7 (100.00% dos usuários de táxi)`.
pub fn format_share_of(part: usize, whole: usize, population: &str) -> String {
    match percentage(part, whole) {
        Some(pct) => format!("{} ({:.2}% {})", part, pct, population),
        None => format!("{} (percentual indefinido)", part),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_present_labels_only() {
        let tally = Tally::from_labels(vec![
            Some("Feminino"),
            None,
            Some("Masculino"),
            Some("Feminino"),
        ]);
        assert_eq!(tally.get("Feminino"), 2);
        assert_eq!(tally.get("Masculino"), 1);
        assert_eq!(tally.get("Outro"), 0);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn sorted_desc_is_stable_on_ties() {
        let mut tally = Tally::new();
        tally.add("A pé", 5);
        tally.add("Ônibus", 9);
        tally.add("Metrô", 5);
        let labels: Vec<String> = tally.sorted_desc().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Ônibus", "A pé", "Metrô"]);
    }

    #[test]
    fn ordered_by_fills_gaps_and_appends_extras() {
        let tally = Tally::from_labels(vec![Some("2 a 3 SM"), Some("13"), Some("Até 1 SM")]);
        let ordered = tally.ordered_by(&["Até 1 SM", "1 a 2 SM", "2 a 3 SM"]);
        assert_eq!(
            ordered,
            vec![
                ("Até 1 SM".to_string(), 1),
                ("1 a 2 SM".to_string(), 0),
                ("2 a 3 SM".to_string(), 1),
                ("13".to_string(), 1),
            ]
        );
    }

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage(1, 0), None);
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(40, 100), Some(40.0));
        assert_eq!(format_share(40, 100), "40 (40.00%)");
        assert_eq!(format_share(3, 0), "3 (percentual indefinido)");
    }

    #[test]
    fn share_of_names_the_population() {
        assert_eq!(
            format_share_of(7, 7, "dos usuários de táxi"),
            "7 (100.00% dos usuários de táxi)"
        );
        assert_eq!(
            format_share_of(1, 3, "dos usuários de ônibus"),
            "1 (33.33% dos usuários de ônibus)"
        );
        assert_eq!(
            format_share_of(0, 0, "dos usuários de táxi"),
            "0 (percentual indefinido)"
        );
    }
}
