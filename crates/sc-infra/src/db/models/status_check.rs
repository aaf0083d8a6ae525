use diesel::prelude::*;
use sc_core::{StatusCheck, StatusCheckId};

use crate::db::schema::t_status_check;

#[derive(Queryable)]
#[diesel(table_name = t_status_check)]
pub struct StatusCheckRow {
    pub id: String,
    pub client_name: String,
    pub created_at_ms: i64,
}

#[derive(Insertable)]
#[diesel(table_name = t_status_check)]
pub struct NewStatusCheckRow {
    pub id: String,
    pub client_name: String,
    pub created_at_ms: i64,
}

impl From<&StatusCheck> for NewStatusCheckRow {
    fn from(check: &StatusCheck) -> Self {
        Self {
            id: check.id.to_string(),
            client_name: check.client_name.clone(),
            created_at_ms: check.created_at_ms,
        }
    }
}

impl StatusCheckRow {
    pub fn into_domain(self) -> StatusCheck {
        StatusCheck {
            id: StatusCheckId::from(self.id),
            client_name: self.client_name,
            created_at_ms: self.created_at_ms,
        }
    }
}
