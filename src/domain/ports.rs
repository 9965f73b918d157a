use super::errors::DomainError;
use super::order::Order;

/// Persistence port for the [`Order`] aggregate.
///
/// Implementations must write an order and all of its items atomically and
/// must report a missing order as [`DomainError::OrderNotFound`].
pub trait OrderRepository: Send + Sync + 'static {
    fn create(&self, order: &Order) -> Result<(), DomainError>;
    fn find(&self, id: &str) -> Result<Order, DomainError>;
    fn find_all(&self) -> Result<Vec<Order>, DomainError>;
    /// Replaces the stored total and reconciles stored items to `order.items()`.
    fn update(&self, order: &Order) -> Result<(), DomainError>;
}
