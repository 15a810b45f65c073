use super::domain::{EvidenceItem, StanceLabel, StanceSummary};
use serde::Serialize;

/// Exact, order-preserving partition of an evidence set by stance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StanceGroups {
    pub supports: Vec<EvidenceItem>,
    pub refutes: Vec<EvidenceItem>,
    pub neutral: Vec<EvidenceItem>,
}

impl StanceGroups {
    pub fn get(&self, label: StanceLabel) -> &[EvidenceItem] {
        match label {
            StanceLabel::Supports => &self.supports,
            StanceLabel::Refutes => &self.refutes,
            StanceLabel::Neutral => &self.neutral,
        }
    }

    pub fn summary(&self) -> StanceSummary {
        StanceSummary {
            supports: self.supports.len(),
            refutes: self.refutes.len(),
            neutral: self.neutral.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.summary().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_parts(self) -> (Vec<EvidenceItem>, Vec<EvidenceItem>, Vec<EvidenceItem>) {
        (self.supports, self.refutes, self.neutral)
    }
}

pub fn group(evidence: &[EvidenceItem]) -> StanceGroups {
    let mut groups = StanceGroups::default();
    for item in evidence {
        let bucket = match item.stance_label() {
            StanceLabel::Supports => &mut groups.supports,
            StanceLabel::Refutes => &mut groups.refutes,
            StanceLabel::Neutral => &mut groups.neutral,
        };
        bucket.push(item.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::domain::Stance;

    fn item(text: &str, label: StanceLabel) -> EvidenceItem {
        EvidenceItem::new(text, label)
    }

    #[test]
    fn partition_preserves_count_and_relative_order() {
        let evidence = vec![
            item("s1", StanceLabel::Supports),
            item("r1", StanceLabel::Refutes),
            item("n1", StanceLabel::Neutral),
            item("s2", StanceLabel::Supports),
            item("r2", StanceLabel::Refutes),
            item("s3", StanceLabel::Supports),
        ];

        let groups = group(&evidence);

        assert_eq!(groups.len(), evidence.len());
        let texts = |items: &[EvidenceItem]| {
            items
                .iter()
                .map(|item| item.text.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(texts(&groups.supports), ["s1", "s2", "s3"]);
        assert_eq!(texts(&groups.refutes), ["r1", "r2"]);
        assert_eq!(texts(&groups.neutral), ["n1"]);
    }

    #[test]
    fn every_item_lands_in_exactly_one_group() {
        let evidence: Vec<_> = (0..12)
            .map(|idx| {
                let label = StanceLabel::ordered()[idx % 3];
                item(&format!("item-{idx}"), label)
            })
            .collect();

        let groups = group(&evidence);

        for original in &evidence {
            let occurrences = StanceLabel::ordered()
                .into_iter()
                .map(|label| {
                    groups
                        .get(label)
                        .iter()
                        .filter(|candidate| candidate.text == original.text)
                        .count()
                })
                .sum::<usize>();
            assert_eq!(occurrences, 1, "{} should appear once", original.text);
        }
    }

    #[test]
    fn missing_stance_is_grouped_as_neutral() {
        let mut unlabeled = item("context", StanceLabel::Neutral);
        unlabeled.stance = None;
        let mut defaulted = item("defaulted", StanceLabel::Neutral);
        defaulted.stance = Some(Stance {
            label: StanceLabel::default(),
            confidence: 0.2,
        });

        let groups = group(&[unlabeled, defaulted]);

        assert_eq!(groups.neutral.len(), 2);
        assert!(groups.supports.is_empty());
        assert!(groups.refutes.is_empty());
    }

    #[test]
    fn empty_evidence_yields_three_empty_groups() {
        let groups = group(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.summary(), StanceSummary::default());
    }
}
