use axum_cafe::schema::clients;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Client {
    pub id: i32,
    pub phone: String,
    pub name: Option<String>,
    pub qr_code: Option<String>,
    pub orders_count: i32,
    pub discount: i32,
    pub created_at: NaiveDateTime,
}

// orders_count, discount and created_at come from the storage defaults.
#[derive(Insertable, Deserialize)]
#[diesel(table_name = clients)]
pub struct NewClient {
    pub phone: String,
    pub name: Option<String>,
    pub qr_code: Option<String>,
}

// phone stays the natural key and created_at is set once, so neither is
// part of the changeset.
#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = clients)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub qr_code: Option<String>,
    pub orders_count: Option<i32>,
    pub discount: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct ClientFilters {
    pub search: Option<String>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_needs_only_a_phone() {
        let payload: NewClient = serde_json::from_str(r#"{"phone": "+79001234567"}"#).unwrap();

        assert_eq!(payload.phone, "+79001234567");
        assert_eq!(payload.name, None);
        assert_eq!(payload.qr_code, None);
    }

    #[test]
    fn filters_parse_date_bounds() {
        let filters: ClientFilters = serde_json::from_str(
            r#"{"search": "79", "created_from": "2025-01-01", "created_to": "2025-02-01"}"#,
        )
        .unwrap();

        assert_eq!(filters.search.as_deref(), Some("79"));
        assert_eq!(
            filters.created_from,
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(filters.created_to, NaiveDate::from_ymd_opt(2025, 2, 1));
    }
}
