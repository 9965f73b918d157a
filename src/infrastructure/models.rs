use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::schema::{order_items, orders};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: String,
    pub customer_id: String,
    pub total: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub id: &'a str,
    pub customer_id: &'a str,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub order_id: String,
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow<'a> {
    pub order_id: &'a str,
    pub id: &'a str,
    pub product_id: &'a str,
    pub name: &'a str,
    pub price: &'a BigDecimal,
    pub quantity: i32,
    pub position: i32,
}
