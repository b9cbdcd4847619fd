use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};


/// Items bucketed by calendar date, preserving both the order of the groups
/// and the order of items within each group.
///
/// Serializes as a JSON object whose keys are `YYYY-MM-DD` strings,
/// emitted in group order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DateGrouped<T> {
    groups: Vec<(NaiveDate, Vec<T>)>,
}

impl<T> DateGrouped<T> {
    pub fn groups(&self) -> &[(NaiveDate, Vec<T>)] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<T> Serialize for DateGrouped<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;

        for (date, items) in &self.groups {
            map.serialize_entry(&date.format("%Y-%m-%d").to_string(), items)?;
        }

        map.end()
    }
}


/// Folds an ordered flat list into consecutive date buckets.
///
/// The input is expected to already be sorted by the grouping date
/// (the store returns entries ordered by date descending);
/// this function merely splits consecutive runs of equal dates
/// and does not reorder anything.
pub fn group_by_date<T, F>(items: impl IntoIterator<Item = T>, date_of: F) -> DateGrouped<T>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut groups: Vec<(NaiveDate, Vec<T>)> = Vec::new();

    for item in items {
        let item_date = date_of(&item);

        match groups.last_mut() {
            Some((current_date, current_items)) if *current_date == item_date => {
                current_items.push(item);
            }
            _ => {
                groups.push((item_date, vec![item]));
            }
        }
    }

    DateGrouped { groups }
}



#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn empty_input_produces_no_groups() {
        let grouped = group_by_date(Vec::<(NaiveDate, &str)>::new(), |(date, _)| *date);

        assert!(grouped.is_empty());
        assert_eq!(serde_json::to_string(&grouped).unwrap(), "{}");
    }

    #[test]
    fn consecutive_runs_become_separate_groups_in_input_order() {
        let entries = vec![
            (date(2026, 8, 30), "newest"),
            (date(2026, 8, 30), "second"),
            (date(2026, 8, 28), "older"),
        ];

        let grouped = group_by_date(entries, |(date, _)| *date);

        assert_eq!(grouped.groups().len(), 2);
        assert_eq!(grouped.groups()[0].0, date(2026, 8, 30));
        assert_eq!(
            grouped.groups()[0].1,
            vec![
                (date(2026, 8, 30), "newest"),
                (date(2026, 8, 30), "second")
            ]
        );
        assert_eq!(grouped.groups()[1].0, date(2026, 8, 28));
    }

    #[test]
    fn serializes_group_keys_in_group_order() {
        let entries = vec![
            (date(2026, 8, 30), "a"),
            (date(2026, 8, 28), "b"),
        ];

        let grouped = group_by_date(entries, |(date, _)| *date);
        let serialized = serde_json::to_string(&grouped).unwrap();

        let newer_position = serialized.find("2026-08-30").unwrap();
        let older_position = serialized.find("2026-08-28").unwrap();

        assert!(newer_position < older_position);
    }
}
