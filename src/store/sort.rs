//! Sort keys and ordering of transaction lists

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Transaction;

/// The field a list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
    Description,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A `<field>-<direction>` sort key such as `date-desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new(SortField::Date, SortDirection::Desc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Date => "date",
            SortField::Amount => "amount",
            SortField::Description => "description",
            SortField::Category => "category",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}-{}", field, direction)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            format!(
                "Invalid sort key '{}' (expected <date|amount|description|category>-<asc|desc>)",
                s
            )
        };

        let (field, direction) = s.trim().split_once('-').ok_or_else(invalid)?;
        let field = match field {
            "date" => SortField::Date,
            "amount" => SortField::Amount,
            "description" => SortField::Description,
            "category" => SortField::Category,
            _ => return Err(invalid()),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(invalid()),
        };
        Ok(Self::new(field, direction))
    }
}

/// Compare text the way a user expects a sorted list to read
///
/// Case-insensitive first; on a tie lowercase sorts before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) if x.is_alphabetic() && y.is_alphabetic() => Ordering::Less,
                (false, true) if x.is_alphabetic() && y.is_alphabetic() => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

fn compare(a: &Transaction, b: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::Description => locale_compare(&a.description, &b.description),
        SortField::Category => locale_compare(&a.category, &b.category),
    }
}

/// Return a sorted copy; equal keys keep their relative order
pub fn sort_transactions(transactions: &[Transaction], key: SortKey) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key.field);
        match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}
