use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderItem};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn place_order(&self, order: &Order) -> Result<(), DomainError> {
        self.repo.create(order)?;
        log::info!("placed order {} totalling {}", order.id(), order.total());
        Ok(())
    }

    pub fn get_order(&self, id: &str) -> Result<Order, DomainError> {
        self.repo.find(id)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.find_all()
    }

    /// Appends `item` to a stored order and persists the new item set.
    pub fn add_item(&self, order_id: &str, item: OrderItem) -> Result<Order, DomainError> {
        let mut order = self.repo.find(order_id)?;
        order.add_item(item)?;
        self.repo.update(&order)?;
        Ok(order)
    }

    pub fn remove_item(&self, order_id: &str, item_id: &str) -> Result<Order, DomainError> {
        let mut order = self.repo.find(order_id)?;
        if order.remove_item(item_id).is_none() {
            log::warn!("order {} has no item {}", order_id, item_id);
            return Err(DomainError::InvalidInput(format!(
                "Item not found: {}",
                item_id
            )));
        }
        self.repo.update(&order)?;
        Ok(order)
    }
}
