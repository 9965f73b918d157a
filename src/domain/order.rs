use bigdecimal::BigDecimal;

use super::errors::DomainError;

/// A single line of an order. Owned by exactly one [`Order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: BigDecimal,
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: BigDecimal,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, DomainError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid("Item id is required"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid("Item name is required"));
        }
        if self.product_id.trim().is_empty() {
            return Err(DomainError::invalid("ProductId is required"));
        }
        if self.price < BigDecimal::from(0) {
            return Err(DomainError::invalid("Price must be greater or equal to 0"));
        }
        if self.quantity <= 0 {
            return Err(DomainError::invalid("Quantity must be greater than 0"));
        }
        Ok(())
    }

    /// Rebuilds an item from stored fields without re-running validation.
    pub(crate) fn restore(
        id: String,
        name: String,
        price: BigDecimal,
        product_id: String,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            name,
            price,
            product_id,
            quantity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// `price * quantity`
    pub fn total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// Aggregate root for a customer's purchase.
///
/// The order total is never stored on the aggregate; [`Order::total`] always
/// derives it from the current items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, DomainError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid("Id is required"));
        }
        if self.customer_id.trim().is_empty() {
            return Err(DomainError::invalid("CustomerId is required"));
        }
        if self.items.is_empty() {
            return Err(DomainError::invalid("Items are required"));
        }
        if self.items.iter().any(|i| i.quantity <= 0) {
            return Err(DomainError::invalid("Quantity must be greater than 0"));
        }
        for (idx, item) in self.items.iter().enumerate() {
            if self.items[..idx].iter().any(|prev| prev.id == item.id) {
                return Err(DomainError::invalid(format!(
                    "Duplicate item id: {}",
                    item.id
                )));
            }
        }
        Ok(())
    }

    /// Rebuilds an order from persisted state. Storage is trusted, so an order
    /// that was written with no items can still be read back.
    pub(crate) fn restore(id: String, customer_id: String, items: Vec<OrderItem>) -> Self {
        Self {
            id,
            customer_id,
            items,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> BigDecimal {
        self.items.iter().map(OrderItem::total).sum()
    }

    pub fn add_item(&mut self, item: OrderItem) -> Result<(), DomainError> {
        if self.items.iter().any(|i| i.id == item.id) {
            return Err(DomainError::invalid(format!(
                "Duplicate item id: {}",
                item.id
            )));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, item_id: &str) -> Option<OrderItem> {
        let idx = self.items.iter().position(|i| i.id == item_id)?;
        Some(self.items.remove(idx))
    }
}
