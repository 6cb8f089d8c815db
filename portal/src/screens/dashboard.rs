//! Dashboard summary and its actions.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::PortalSettings;
use crate::domain::{
    Message, MembershipStatus, Order, OrderStatus, Service, ServiceSortKey, TimeSlot, recent,
    unread_badge, unread_count,
};
use crate::example_data::PortalCatalogue;
use crate::listing::derive_list;
use crate::selection::DetailSelection;
use crate::shell::{NavigationShell, PendingNavigation, Section, navigate_after};

/// An upcoming service visit shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingVisit {
    pub order_id: String,
    pub service: String,
    pub company: String,
    pub pool: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub technician: String,
}

impl From<&Order> for UpcomingVisit {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id().to_owned(),
            service: order.service().to_owned(),
            company: order.company().to_owned(),
            pool: order.pool().to_owned(),
            date: order.date(),
            time: order.time(),
            technician: order.technician().name.clone(),
        }
    }
}

/// Read-only view of the customer's portal home.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub customer_name: String,
    pub today: NaiveDate,
    /// Upcoming orders on or after `today`, soonest first.
    pub upcoming_visits: Vec<UpcomingVisit>,
    pub unread_messages: usize,
    pub unread_badge: Option<String>,
    pub recent_messages: Vec<Message>,
    pub membership: MembershipStatus,
    /// The services listing in its default order.
    pub services: Vec<Service>,
}

impl DashboardSnapshot {
    /// Summarises `catalogue` as seen on `today`.
    ///
    /// At most `recent_limit` messages are previewed.
    pub fn build(catalogue: &PortalCatalogue, today: NaiveDate, recent_limit: usize) -> Self {
        let mut upcoming: Vec<UpcomingVisit> = catalogue
            .orders
            .iter()
            .filter(|order| order.status() == OrderStatus::Upcoming && order.date() >= today)
            .map(UpcomingVisit::from)
            .collect();
        upcoming.sort_by_key(|visit| (visit.date, visit.time));

        let unread = unread_count(&catalogue.messages);
        let sort = ServiceSortKey::default();
        let services = derive_list(catalogue.services.services(), |_| true, |a, b| {
            sort.compare(a, b)
        });

        Self {
            customer_name: catalogue.profile.full_name(),
            today,
            upcoming_visits: upcoming,
            unread_messages: unread,
            unread_badge: unread_badge(unread),
            recent_messages: recent(&catalogue.messages, recent_limit)
                .into_iter()
                .cloned()
                .collect(),
            membership: catalogue.membership.status(),
            services: services.into_iter().cloned().collect(),
        }
    }
}

/// The portal home: the summary plus its detail dialog and booking shortcut.
#[derive(Debug)]
pub struct DashboardScreen {
    snapshot: DashboardSnapshot,
    upcoming: Vec<Order>,
    details: DetailSelection<String>,
    navigation_delay: Duration,
    pending: Option<PendingNavigation>,
}

impl DashboardScreen {
    /// Builds the home screen for `today` using the configured preview size
    /// and navigation delay.
    pub fn new(catalogue: &PortalCatalogue, today: NaiveDate, settings: &PortalSettings) -> Self {
        let snapshot = DashboardSnapshot::build(catalogue, today, settings.recent_messages_limit());
        let upcoming = snapshot
            .upcoming_visits
            .iter()
            .filter_map(|visit| {
                catalogue
                    .orders
                    .iter()
                    .find(|order| order.id() == visit.order_id)
                    .cloned()
            })
            .collect();
        Self {
            snapshot,
            upcoming,
            details: DetailSelection::default(),
            navigation_delay: settings.navigation_delay(),
            pending: None,
        }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn navigation_delay(&self) -> Duration {
        self.navigation_delay
    }

    /// Shows the full record behind an upcoming visit.
    ///
    /// Only visits listed on the dashboard can be opened; other ids are
    /// ignored and leave the dialog as it was.
    pub fn view_details(&mut self, order_id: &str) -> Option<&Order> {
        let index = self.upcoming.iter().position(|order| order.id() == order_id)?;
        self.details.open(order_id.to_owned());
        Some(&self.upcoming[index])
    }

    /// Hides the visit dialog.
    pub fn close_details(&mut self) {
        self.details.close();
    }

    pub fn selected_visit(&self) -> Option<&Order> {
        let id = self.details.selected()?;
        self.upcoming.iter().find(|order| order.id() == id)
    }

    /// Closes the detail dialog and schedules the switch to the services
    /// section after the configured delay.
    ///
    /// A second request replaces the first. Dropping the screen cancels a
    /// switch that has not fired.
    pub fn book_service(&mut self, shell: Arc<Mutex<NavigationShell>>) {
        self.details.close();
        debug!(delay = ?self.navigation_delay, "book service requested");
        self.pending = Some(navigate_after(shell, Section::Services, self.navigation_delay));
    }

    /// The "book service" navigation still waiting to apply.
    pub fn pending_navigation(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    /// Hands the scheduled navigation to the caller, if any.
    pub fn take_pending_navigation(&mut self) -> Option<PendingNavigation> {
        self.pending.take()
    }
}
