//! Floor plan — dining sections, table numbers and takeaway slots.

/// One dining section with its table labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Section display name.
    pub name: &'static str,
    /// Table labels in grid order.
    pub tables: &'static [&'static str],
}

/// Tables "1" through "28"; every section uses the same grid.
const TABLES: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28",
];

/// The three dine-in sections shown on the category picker.
pub const SECTIONS: [Section; 3] = [
    Section {
        name: "Section 1",
        tables: TABLES,
    },
    Section {
        name: "Section 2",
        tables: TABLES,
    },
    Section {
        name: "Section 3",
        tables: TABLES,
    },
];

/// Takeaway counter slots (T*) and delivery slots (D*).
pub const TAKEAWAY_SLOTS: &[&str] = &[
    "T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8", "T9", "T10", "T11", "T12", "T13", "T14",
    "T15", "T16", "T17", "T18", "T19", "T20", "D1", "D2", "D3", "D4", "D5", "D6", "D7", "D8",
];
