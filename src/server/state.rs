use crate::server::model::order::{Order, OrderStatus};
use std::sync::Arc;

/// In-memory placeholder, nothing is persisted.
#[derive(Clone)]
pub(crate) struct AppState {
    orders: Arc<[Order]>,
}

impl AppState {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into(),
        }
    }

    /// state holding the fixed seed order
    pub fn seeded() -> Self {
        Self::new(vec![Order {
            id: 1,
            status: OrderStatus::Paid,
        }])
    }

    pub fn get_orders(&self) -> &[Order] {
        &self.orders
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn app_state() {
        let state = AppState::seeded();
        assert_eq!(state.get_orders(), &[Order { id: 1, status: OrderStatus::Paid }]);

        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.orders, &cloned.orders));
    }
}
