//! Database models for activities.

use diesel::prelude::*;

use steplog_core::activities::{Activity, NewActivity};

/// Database model for activities
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone, Copy)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityDB {
    pub id: i64,
    pub steps: i64,
    pub date: i64,
}

/// Insert model; the id comes from AUTOINCREMENT.
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = crate::schema::activities)]
pub struct NewActivityDB {
    pub steps: i64,
    pub date: i64,
}

impl From<ActivityDB> for Activity {
    fn from(db: ActivityDB) -> Self {
        Self {
            id: db.id,
            steps: db.steps,
            date: db.date,
        }
    }
}

impl From<NewActivity> for NewActivityDB {
    fn from(domain: NewActivity) -> Self {
        Self {
            steps: domain.steps,
            date: domain.date,
        }
    }
}
