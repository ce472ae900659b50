use crate::client::models::Client;
use axum_cafe::schema::orders;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Draft,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Черновик",
            OrderStatus::Paid => "Оплачен",
            OrderStatus::Cancelled => "Отменен",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql<Text, Pg> for OrderStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for OrderStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match std::str::from_utf8(bytes.as_bytes())? {
            "draft" => Ok(OrderStatus::Draft),
            "paid" => Ok(OrderStatus::Paid),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unrecognized order status: {}", other).into()),
        }
    }
}

// `items` is free-form on purpose: the original system never fixed a schema
// for it, so it stays an opaque JSON mapping rather than a typed line-item
// list.
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, PartialEq, Serialize)]
#[diesel(belongs_to(Client))]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub client_id: Option<i32>,
    pub items: serde_json::Value,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub client_id: Option<i32>,
    #[serde(default = "empty_items")]
    pub items: serde_json::Value,
    #[serde(default)]
    pub total: BigDecimal,
    #[serde(default)]
    pub status: OrderStatus,
}

fn empty_items() -> serde_json::Value {
    serde_json::json!({})
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = orders)]
pub struct UpdateOrder {
    pub client_id: Option<i32>,
    pub items: Option<serde_json::Value>,
    pub total: Option<BigDecimal>,
    pub status: Option<OrderStatus>,
}

#[derive(Deserialize, Debug)]
pub struct OrderFilters {
    pub status: Option<OrderStatus>,
    pub client_phone: Option<String>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_defaults_to_an_empty_draft() {
        let payload: NewOrder = serde_json::from_str("{}").unwrap();

        assert_eq!(payload.client_id, None);
        assert_eq!(payload.items, serde_json::json!({}));
        assert_eq!(payload.total, BigDecimal::from(0));
        assert_eq!(payload.status, OrderStatus::Draft);
    }

    #[test]
    fn status_tags_round_trip() {
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
        assert_eq!(status.to_string(), "cancelled");
        assert_eq!(status.label(), "Отменен");
    }

    #[test]
    fn items_payload_stays_opaque() {
        let payload: NewOrder = serde_json::from_str(
            r#"{"items": {"3": {"quantity": 2}, "5": {"quantity": 1}}, "total": "540.00"}"#,
        )
        .unwrap();

        assert_eq!(payload.items["3"]["quantity"], serde_json::json!(2));
        assert_eq!(payload.total, "540.00".parse::<BigDecimal>().unwrap());
    }
}
