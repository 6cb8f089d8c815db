//! Order tracking screen.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::domain::{Order, OrderStatus};
use crate::listing::{CategoryCounts, TabFilter, TabbedView};
use crate::selection::{DetailSelection, RatingError, RatingFlow, RescheduleError, RescheduleFlow};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderActionError {
    #[error("no order with id {id}")]
    UnknownOrder { id: String },
    #[error("order {id} is {status} and cannot be rated")]
    NotRatable { id: String, status: OrderStatus },
    #[error("order {id} is {status} and cannot be rescheduled")]
    NotReschedulable { id: String, status: OrderStatus },
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error(transparent)]
    Reschedule(#[from] RescheduleError),
}

/// Orders by status tab, with detail, rating and reschedule dialogs.
pub struct OrdersScreen {
    orders: Vec<Order>,
    tabs: TabbedView<OrderStatus>,
    details: DetailSelection<String>,
    rating: RatingFlow,
    reschedule: RescheduleFlow,
    clock: Arc<dyn Clock>,
}

impl OrdersScreen {
    /// Opens on the `all` tab with no dialog showing.
    pub fn new(orders: Vec<Order>, clock: Arc<dyn Clock>) -> Self {
        Self {
            orders,
            tabs: TabbedView::default(),
            details: DetailSelection::default(),
            rating: RatingFlow::default(),
            reschedule: RescheduleFlow::default(),
            clock,
        }
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.as_slice()
    }

    pub fn active_tab(&self) -> TabFilter<OrderStatus> {
        self.tabs.active()
    }

    /// Switches tabs. Open dialogs stay open.
    pub fn select_tab(&mut self, tab: TabFilter<OrderStatus>) {
        self.tabs.select(tab);
    }

    /// Orders in the active tab, in master-list order.
    pub fn visible(&self) -> Vec<&Order> {
        self.tabs.view(&self.orders)
    }

    /// Badge counts over every order.
    pub fn counts(&self) -> CategoryCounts<OrderStatus> {
        self.tabs.counts(&self.orders)
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    /// Shows the detail dialog for `id`.
    ///
    /// # Errors
    ///
    /// [`OrderActionError::UnknownOrder`] when no order has that id.
    pub fn open_details(&mut self, id: &str) -> Result<(), OrderActionError> {
        self.require(id)?;
        self.details.open(id.to_owned());
        Ok(())
    }

    pub fn close_details(&mut self) {
        self.details.close();
    }

    pub fn selected(&self) -> Option<&Order> {
        self.details.selected().and_then(|id| self.find(id))
    }

    pub fn rating(&self) -> &RatingFlow {
        &self.rating
    }

    /// The rating dialog, for editing.
    pub fn rating_mut(&mut self) -> &mut RatingFlow {
        &mut self.rating
    }

    pub fn reschedule(&self) -> &RescheduleFlow {
        &self.reschedule
    }

    /// The reschedule dialog, for editing.
    pub fn reschedule_mut(&mut self) -> &mut RescheduleFlow {
        &mut self.reschedule
    }

    /// Opens the rating dialog for a completed, unrated order.
    pub fn start_rating(&mut self, id: &str) -> Result<(), OrderActionError> {
        let order = self.require(id)?;
        if !order.can_rate() {
            return Err(OrderActionError::NotRatable {
                id: id.to_owned(),
                status: order.status(),
            });
        }
        self.rating.open(id);
        Ok(())
    }

    /// Submits the rating dialog, replacing the rated order.
    pub fn submit_rating(&mut self) -> Result<&Order, OrderActionError> {
        let id = self.rating.order_id().ok_or(RatingError::NotOpen)?.to_owned();
        let index = self.index_of(&id)?;
        let rated = self.rating.submit(&self.orders[index])?;
        self.orders[index] = rated;
        Ok(&self.orders[index])
    }

    /// Opens the reschedule dialog for an upcoming order.
    pub fn start_reschedule(&mut self, id: &str) -> Result<(), OrderActionError> {
        let order = self.require(id)?;
        if !order.can_reschedule() {
            return Err(OrderActionError::NotReschedulable {
                id: id.to_owned(),
                status: order.status(),
            });
        }
        self.reschedule.open(id);
        Ok(())
    }

    /// Whether the reschedule confirm action is enabled today.
    pub fn can_submit_reschedule(&self) -> bool {
        self.reschedule.can_submit(self.clock.local().date_naive())
    }

    pub fn submit_reschedule(&mut self) -> Result<&Order, OrderActionError> {
        let id = self
            .reschedule
            .order_id()
            .ok_or(RescheduleError::NotOpen)?
            .to_owned();
        let index = self.index_of(&id)?;
        let today = self.clock.local().date_naive();
        let moved = self.reschedule.submit(&self.orders[index], today)?;
        self.orders[index] = moved;
        Ok(&self.orders[index])
    }

    fn require(&self, id: &str) -> Result<&Order, OrderActionError> {
        self.find(id).ok_or_else(|| OrderActionError::UnknownOrder { id: id.to_owned() })
    }

    fn index_of(&self, id: &str) -> Result<usize, OrderActionError> {
        self.orders
            .iter()
            .position(|order| order.id() == id)
            .ok_or_else(|| OrderActionError::UnknownOrder { id: id.to_owned() })
    }
}
