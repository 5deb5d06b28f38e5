/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (release dates, birth dates) carry no time zone.
pub type Date = chrono::NaiveDate;
