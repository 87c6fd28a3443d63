use chrono::NaiveDate;
use rand::Rng;

pub const DEFAULT_COUNT: i64 = 5;
pub const MAX_RECORDS: i64 = 20;

pub const AMOUNT_MIN: u32 = 1_000;
pub const AMOUNT_MAX: u32 = 100_000;

pub const ORGANIZATIONS: &[&str] = &[
    "Horns & Hooves LLC",
    "Ivanov Sole Proprietorship",
    "Technologies LLC",
    "Progress JSC",
    "Innovations LLC",
];

pub const OPERATIONS: &[&str] = &[
    "Goods receipt",
    "Services sale",
    "Payment to supplier",
    "Payment received",
];

/// One synthetic ledger entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub organization: &'static str,
    pub operation: &'static str,
    pub amount: u32,
    pub date: NaiveDate,
}

/// Sample `count` records. Every field is drawn independently per record, so
/// repeats across records are expected.
pub fn generate_records<R: Rng>(count: usize, rng: &mut R, date: NaiveDate) -> Vec<TestRecord> {
    (0..count)
        .map(|_| TestRecord {
            organization: ORGANIZATIONS[rng.random_range(0..ORGANIZATIONS.len())],
            operation: OPERATIONS[rng.random_range(0..OPERATIONS.len())],
            amount: rng.random_range(AMOUNT_MIN..=AMOUNT_MAX),
            date,
        })
        .collect()
}

/// Render `count` records as a numbered text block, or an error line when
/// `count` is outside `1..=MAX_RECORDS`.
pub fn generate_test_data<R: Rng>(count: i64, rng: &mut R, date: NaiveDate) -> String {
    if count > MAX_RECORDS {
        return format!("Error: maximum {} records per request", MAX_RECORDS);
    }
    if count <= 0 {
        return "Error: count must be positive".into();
    }

    // count is in 1..=20 here
    let records = generate_records(count as usize, rng, date);

    let mut out = String::from("Test data (simulated 1C):\n\n");
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, record.organization));
        out.push_str(&format!("   Operation: {}\n", record.operation));
        out.push_str(&format!("   Amount: {} RUB\n", group_thousands(record.amount)));
        out.push_str(&format!("   Date: {}\n\n", record.date.format("%d.%m.%Y")));
    }
    out
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
