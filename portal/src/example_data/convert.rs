//! Conversion from seed records to validated domain values.

use example_data::{
    CouponSeed, MessageSeed, OrderSeed, PointsEntrySeed, PoolSeed, ProfileSeed, SeedRegistry,
    ServiceSeed, TierSeed, TimelineSeed,
};
use thiserror::Error;

use crate::domain::{
    CatalogueValidationError, Coupon, Membership, MembershipTier, MembershipValidationError,
    Message, MessageDraft, MessageValidationError, Order, OrderDraft, OrderValidationError,
    ParseOrderStatusError, ParseTimeSlotError, PointsEntry, Pool, PoolAddress, PoolDraft,
    PoolValidationError, Profile, RatingValueError, Service, ServiceCatalogue, ServiceDraft,
    ServiceVisit, StarRating, Technician, TimelineEntry, WaterSystem,
};

/// Errors raised while turning seed records into domain values.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("service '{id}' is invalid: {source}")]
    Service {
        id: String,
        #[source]
        source: CatalogueValidationError,
    },
    #[error("service catalogue is invalid: {0}")]
    Catalogue(#[source] CatalogueValidationError),
    #[error("pool '{id}' is invalid: {source}")]
    Pool {
        id: String,
        #[source]
        source: PoolValidationError,
    },
    #[error("order '{id}' has an unknown status: {source}")]
    OrderStatus {
        id: String,
        #[source]
        source: ParseOrderStatusError,
    },
    #[error("order '{id}' carries an invalid rating: {source}")]
    OrderRating {
        id: String,
        #[source]
        source: RatingValueError,
    },
    #[error("order '{id}' is invalid: {source}")]
    Order {
        id: String,
        #[source]
        source: OrderValidationError,
    },
    #[error("message '{id}' is invalid: {source}")]
    Message {
        id: String,
        #[source]
        source: MessageValidationError,
    },
    #[error("{record} has an invalid time: {source}")]
    Time {
        record: String,
        #[source]
        source: ParseTimeSlotError,
    },
    #[error("membership is invalid: {0}")]
    Membership(#[from] MembershipValidationError),
}

/// Every master list the portal works from, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalCatalogue {
    pub services: ServiceCatalogue,
    pub pools: Vec<Pool>,
    pub orders: Vec<Order>,
    pub messages: Vec<Message>,
    pub membership: Membership,
    pub profile: Profile,
}

impl PortalCatalogue {
    /// Converts a parsed registry, stopping at the first invalid record.
    pub fn from_registry(registry: &SeedRegistry) -> Result<Self, ConversionError> {
        let services = registry
            .services()
            .iter()
            .map(service_from_seed)
            .collect::<Result<Vec<_>, _>>()?;
        let services = ServiceCatalogue::new(services).map_err(ConversionError::Catalogue)?;
        let pools = registry
            .pools()
            .iter()
            .map(pool_from_seed)
            .collect::<Result<Vec<_>, _>>()?;
        let orders = registry
            .orders()
            .iter()
            .map(order_from_seed)
            .collect::<Result<Vec<_>, _>>()?;
        let messages = registry
            .messages()
            .iter()
            .map(message_from_seed)
            .collect::<Result<Vec<_>, _>>()?;
        let membership = membership_from_registry(registry)?;

        Ok(Self {
            services,
            pools,
            orders,
            messages,
            membership,
            profile: profile_from_seed(registry.profile()),
        })
    }

    /// Looks a pool up by id.
    pub fn find_pool(&self, id: &str) -> Option<&Pool> {
        self.pools.iter().find(|pool| pool.id() == id)
    }
}

fn service_from_seed(seed: &ServiceSeed) -> Result<Service, ConversionError> {
    Service::new(ServiceDraft {
        id: seed.id.clone(),
        name: seed.name.clone(),
        company: seed.company.clone(),
        description: seed.description.clone(),
        price: seed.price,
        duration: seed.duration.clone(),
        popular: seed.popular,
        created_at: seed.created_at,
        features: seed.features.clone(),
    })
    .map_err(|source| ConversionError::Service {
        id: seed.id.clone(),
        source,
    })
}

fn pool_from_seed(seed: &PoolSeed) -> Result<Pool, ConversionError> {
    let pool_error = |source: PoolValidationError| ConversionError::Pool {
        id: seed.id.clone(),
        source,
    };
    let service_history = seed
        .service_history
        .iter()
        .map(|visit| -> Result<ServiceVisit, PoolValidationError> {
            Ok(ServiceVisit {
                date: visit.date,
                service: visit.service.clone(),
                technician: visit.technician.clone(),
                rating: StarRating::new(visit.rating)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(pool_error)?;

    Pool::new(PoolDraft {
        id: seed.id.clone(),
        name: seed.name.clone(),
        address: PoolAddress {
            line1: seed.address.clone(),
            line2: seed.address2.clone(),
            city: seed.city.clone(),
            state: seed.state.clone(),
            postal_code: seed.postal_code.clone(),
            country: seed.country.clone(),
        },
        size: seed.size.clone(),
        gallons: seed.gallons,
        water_system: WaterSystem::from_label(&seed.water_system),
        heater_type: seed.heater_type.clone(),
        equipment: seed.equipment.clone(),
        notes: seed.notes.clone(),
        last_service: seed.last_service,
        next_service: seed.next_service,
        service_history,
    })
    .map_err(pool_error)
}

fn timeline_from_seed(order_id: &str, seed: &TimelineSeed) -> Result<TimelineEntry, ConversionError> {
    Ok(TimelineEntry {
        date: seed.date,
        time: parse_time(&seed.time, || format!("order '{order_id}' timeline"))?,
        status: seed.status.clone(),
        completed: seed.completed,
    })
}

fn order_from_seed(seed: &OrderSeed) -> Result<Order, ConversionError> {
    let status = seed
        .status
        .parse()
        .map_err(|source| ConversionError::OrderStatus {
            id: seed.id.clone(),
            source,
        })?;
    let rating = seed
        .rating
        .map(StarRating::new)
        .transpose()
        .map_err(|source| ConversionError::OrderRating {
            id: seed.id.clone(),
            source,
        })?;
    let timeline = seed
        .timeline
        .iter()
        .map(|entry| timeline_from_seed(&seed.id, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Order::new(OrderDraft {
        id: seed.id.clone(),
        service: seed.service.clone(),
        company: seed.company.clone(),
        pool: seed.pool.clone(),
        date: seed.date,
        time: parse_time(&seed.time, || format!("order '{}'", seed.id))?,
        technician: Technician {
            name: seed.technician.name.clone(),
            phone: seed.technician.phone.clone(),
            rating: seed.technician.rating,
        },
        status,
        price: seed.price,
        discount: seed.discount,
        points_applied: seed.points_applied,
        final_price: Some(seed.final_price),
        notes: seed.notes.clone(),
        timeline,
        photos: seed.photos.clone(),
        rating,
    })
    .map_err(|source| ConversionError::Order {
        id: seed.id.clone(),
        source,
    })
}

fn message_from_seed(seed: &MessageSeed) -> Result<Message, ConversionError> {
    let message_error = |source: MessageValidationError| ConversionError::Message {
        id: seed.id.clone(),
        source,
    };
    let kind = seed.kind.parse().map_err(message_error)?;
    let priority = seed.priority.parse().map_err(message_error)?;

    Message::new(MessageDraft {
        id: seed.id.clone(),
        kind,
        title: seed.title.clone(),
        description: seed.description.clone(),
        date: seed.date,
        time: parse_time(&seed.time, || format!("message '{}'", seed.id))?,
        read: seed.read,
        priority,
    })
    .map_err(message_error)
}

fn membership_from_registry(registry: &SeedRegistry) -> Result<Membership, ConversionError> {
    let tiers = registry.tiers().iter().map(tier_from_seed).collect();
    let coupons = registry.coupons().iter().map(coupon_from_seed).collect();
    let history = registry
        .points_history()
        .iter()
        .map(points_entry_from_seed)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Membership::new(
        tiers,
        registry.points_balance(),
        coupons,
        history,
    )?)
}

fn tier_from_seed(seed: &TierSeed) -> MembershipTier {
    MembershipTier {
        name: seed.name.clone(),
        color: seed.color.clone(),
        points_required: seed.points_required,
        benefits: seed.benefits.clone(),
    }
}

fn coupon_from_seed(seed: &CouponSeed) -> Coupon {
    Coupon {
        id: seed.id.clone(),
        title: seed.title.clone(),
        description: seed.description.clone(),
        points_cost: seed.points_cost,
        expiry_date: seed.expiry_date,
        code: seed.code.clone(),
    }
}

fn points_entry_from_seed(seed: &PointsEntrySeed) -> Result<PointsEntry, MembershipValidationError> {
    Ok(PointsEntry {
        date: seed.date,
        description: seed.description.clone(),
        points: seed.points,
        kind: seed.kind.parse()?,
    })
}

fn profile_from_seed(seed: &ProfileSeed) -> Profile {
    Profile {
        first_name: seed.first_name.clone(),
        last_name: seed.last_name.clone(),
        email: seed.email.clone(),
        phone: seed.phone.clone(),
        address: seed.address.clone(),
    }
}

fn parse_time(
    raw: &str,
    record: impl FnOnce() -> String,
) -> Result<crate::domain::TimeSlot, ConversionError> {
    raw.parse().map_err(|source| ConversionError::Time {
        record: record(),
        source,
    })
}
