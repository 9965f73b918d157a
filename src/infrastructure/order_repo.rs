use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderItem};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_items, orders};

use super::models::{NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Persistence(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Persistence(e.to_string())
    }
}

// ── Row mapping ──────────────────────────────────────────────────────────────

fn item_rows(order: &Order) -> Result<Vec<NewOrderItemRow<'_>>, DomainError> {
    order
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let position = i32::try_from(idx).map_err(|_| {
                DomainError::Persistence(format!("too many items on order {}", order.id()))
            })?;
            Ok(NewOrderItemRow {
                order_id: order.id(),
                id: item.id(),
                product_id: item.product_id(),
                name: item.name(),
                price: item.price(),
                quantity: item.quantity(),
                position,
            })
        })
        .collect()
}

/// Folds joined `(order, item)` rows into aggregates. Rows must arrive
/// grouped by order id.
fn assemble(rows: Vec<(OrderRow, Option<OrderItemRow>)>) -> Vec<Order> {
    let mut grouped: Vec<(OrderRow, Vec<OrderItemRow>)> = Vec::new();
    for (order, item) in rows {
        if let Some((current, items)) = grouped.last_mut() {
            if current.id == order.id {
                items.extend(item);
                continue;
            }
        }
        grouped.push((order, item.into_iter().collect()));
    }

    grouped
        .into_iter()
        .map(|(order, items)| {
            let items = items
                .into_iter()
                .map(|i| OrderItem::restore(i.id, i.name, i.price, i.product_id, i.quantity))
                .collect();
            Order::restore(order.id, order.customer_id, items)
        })
        .collect()
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Diesel-backed [`OrderRepository`].
///
/// Concurrent `update` calls on the same order are not coordinated; the last
/// transaction to commit wins.
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, order: &Order) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order with a freshly computed total
            diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: order.id(),
                    customer_id: order.customer_id(),
                    total: order.total(),
                })
                .execute(conn)?;

            // 2. Insert its items
            let items = item_rows(order)?;
            if !items.is_empty() {
                diesel::insert_into(order_items::table)
                    .values(&items)
                    .execute(conn)?;
            }

            Ok(())
        })?;

        log::debug!(
            "created order {} with {} item(s)",
            order.id(),
            order.items().len()
        );
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .left_join(order_items::table)
            .filter(orders::id.eq(id))
            .order(order_items::position.asc())
            .select((OrderRow::as_select(), Option::<OrderItemRow>::as_select()))
            .load::<(OrderRow, Option<OrderItemRow>)>(&mut conn)?;

        assemble(rows).pop().ok_or(DomainError::OrderNotFound)
    }

    fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .left_join(order_items::table)
            .order((orders::id.asc(), order_items::position.asc()))
            .select((OrderRow::as_select(), Option::<OrderItemRow>::as_select()))
            .load::<(OrderRow, Option<OrderItemRow>)>(&mut conn)?;

        Ok(assemble(rows))
    }

    fn update(&self, order: &Order) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let removed = conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Refresh the total; zero rows means the order does not exist
            let updated = diesel::update(orders::table.find(order.id()))
                .set(orders::total.eq(order.total()))
                .execute(conn)?;
            if updated == 0 {
                return Err(DomainError::OrderNotFound);
            }

            // 2. Drop stored items that are no longer on the order
            let keep: Vec<&str> = order.items().iter().map(OrderItem::id).collect();
            let removed = diesel::delete(
                order_items::table
                    .filter(order_items::order_id.eq(order.id()))
                    .filter(order_items::id.ne_all(&keep)),
            )
            .execute(conn)?;

            // 3. Insert new items and overwrite the ones that already exist
            let items = item_rows(order)?;
            if !items.is_empty() {
                diesel::insert_into(order_items::table)
                    .values(&items)
                    .on_conflict((order_items::order_id, order_items::id))
                    .do_update()
                    .set((
                        order_items::product_id.eq(excluded(order_items::product_id)),
                        order_items::name.eq(excluded(order_items::name)),
                        order_items::price.eq(excluded(order_items::price)),
                        order_items::quantity.eq(excluded(order_items::quantity)),
                        order_items::position.eq(excluded(order_items::position)),
                    ))
                    .execute(conn)?;
            }

            Ok(removed)
        })?;

        log::debug!(
            "updated order {}: {} item(s) kept or added, {} removed",
            order.id(),
            order.items().len(),
            removed
        );
        Ok(())
    }
}
