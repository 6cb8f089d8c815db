//! Domain value types for the customer portal.
//!
//! Every record here is immutable once constructed. Constructors validate a
//! `*Draft` payload and state changes produce new values through explicit
//! transition functions (for example [`Message::mark_read`]).

pub mod account;
pub mod booking_request;
pub mod catalogue;
pub mod form;
pub mod membership;
pub mod messages;
pub mod orders;
pub mod pools;
pub mod ports;
pub mod rating;
pub mod time_slot;

pub use self::account::{
    AccountPreferences, AccountPreferencesBuilder, Currency, INVALID_EMAIL_MESSAGE, Language,
    NotificationSettings, ParseCurrencyError, ParseLanguageError, ParseTimezoneError, Profile,
    ProfileField, ProfileForm, Timezone,
};
pub use self::booking_request::BookingRequest;
pub use self::catalogue::{
    CatalogueValidationError, ParseSortKeyError, Service, ServiceCatalogue, ServiceDraft,
    ServiceSortKey,
};
pub use self::form::{FieldErrors, REQUIRED_FIELD_MESSAGE};
pub use self::membership::{
    Coupon, Membership, MembershipStatus, MembershipTier, MembershipValidationError, PointsEntry,
    PointsEntryKind,
};
pub use self::messages::{
    Message, MessageDraft, MessageKind, MessageValidationError, Priority, mark_all_read, recent,
    relative_date_label, unread_badge, unread_count,
};
pub use self::orders::{
    Order, OrderDraft, OrderStatus, OrderValidationError, POINTS_PER_CURRENCY_UNIT,
    ParseOrderStatusError, Technician, TimelineEntry, final_price, points_value,
};
pub use self::pools::{
    COUNTRY_OPTIONS, EQUIPMENT_OPTIONS, HEATER_OPTIONS, Pool, PoolAddress, PoolDraft,
    PoolEditError, PoolEditForm, PoolField, PoolValidationError, ServiceVisit, WaterSystem,
};
pub use self::ports::{BookingHandoff, BookingHandoffError, LoggingBookingHandoff};
pub use self::rating::{RatingValueError, StarRating};
pub use self::time_slot::{BOOKING_SLOTS, ParseTimeSlotError, RESCHEDULE_SLOTS, TimeSlot};
