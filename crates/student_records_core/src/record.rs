use serde::{Deserialize, Serialize};

pub const STUD_ID_ATTR: &str = "StudId";
pub const FIRST_NAME_ATTR: &str = "FirstName";
pub const LAST_NAME_ATTR: &str = "LastName";
pub const DEPT_ATTR: &str = "Dept";
pub const AGE_ATTR: &str = "Age";

/// One student entry as stored in the records table.
///
/// Identifier uniqueness is left to the table: writing a record whose
/// `stud_id` already exists replaces the stored item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentRecord {
    #[serde(rename = "StudId")]
    pub stud_id: u64,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Dept")]
    pub dept: String,
    #[serde(rename = "Age")]
    pub age: u32,
}

impl StudentRecord {
    pub fn new(
        stud_id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dept: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            stud_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            dept: dept.into(),
            age,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The fixed records written by the seeder, in write order.
pub fn seed_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(100, "Harry", "Styles", "IT", 28),
        StudentRecord::new(200, "Sam", "Billings", "BE", 22),
        StudentRecord::new(300, "Pete", "Davidson", "EE", 25),
    ]
}

/// A record as read back from the table, where any attribute may be absent.
///
/// Items written by something other than the seeder still get counted and
/// printed; missing fields render as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedRecord {
    pub stud_id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dept: Option<String>,
    pub age: Option<u32>,
}

impl ScannedRecord {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            display_or_none(&self.first_name),
            display_or_none(&self.last_name)
        )
    }

    pub fn is_complete(&self) -> bool {
        self.stud_id.is_some()
            && self.first_name.is_some()
            && self.last_name.is_some()
            && self.dept.is_some()
            && self.age.is_some()
    }
}

impl From<StudentRecord> for ScannedRecord {
    fn from(record: StudentRecord) -> Self {
        Self {
            stud_id: Some(record.stud_id),
            first_name: Some(record.first_name),
            last_name: Some(record.last_name),
            dept: Some(record.dept),
            age: Some(record.age),
        }
    }
}

pub fn display_or_none<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}
