//! Helper macro for declaring port error enums.

/// Declares a `thiserror` enum whose variants each get a snake-case
/// constructor accepting `impl Into<_>` for every field.
///
/// Variants are always written with braces, possibly empty.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Closed {} => "port closed",
            Refused { reason: String } => "refused: {reason}",
            Throttled { reason: String, retry_after_secs: u64 } => "throttled: {reason} ({retry_after_secs}s)",
        }
    }

    #[test]
    fn empty_variants_get_nullary_constructors() {
        assert_eq!(SamplePortError::closed().to_string(), "port closed");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::refused("pool offline");
        assert_eq!(err, SamplePortError::Refused { reason: "pool offline".to_owned() });
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::throttled("busy", 30_u64);
        assert_eq!(err.to_string(), "throttled: busy (30s)");
    }
}
