use mediator::Event;

use crate::models::product::Product;

#[derive(Debug, Clone)]
pub struct ProductAddedEvent(pub Product);
impl Event for ProductAddedEvent {}

/// Carries the stock value before the update so subscribers can log the
/// transition.
#[derive(Debug, Clone)]
pub struct ProductUpdatedEvent {
    pub product: Product,
    pub previous_stock: u32,
}
impl Event for ProductUpdatedEvent {}

#[derive(Debug, Clone)]
pub struct ProductDeletedEvent(pub Product);
impl Event for ProductDeletedEvent {}
