//! Helper macro for generating port error enums with snake_case constructors.
//!
//! Each variant becomes a `thiserror` variant with the given message, plus a
//! constructor named after the variant. Struct fields are accepted through
//! `impl Into<T>` so callers can pass `&str` for `String` fields.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Offline { message: String } => "store offline: {message}",
            Missing { id: String, attempts: u32 } => "missing {id} after {attempts} attempts",
            Duplicate => "duplicate entry",
        }
    }

    #[test]
    fn struct_variant_constructor_accepts_str() {
        let err = StoreError::offline("refused");
        assert_eq!(err, StoreError::Offline { message: "refused".to_owned() });
        assert_eq!(err.to_string(), "store offline: refused");
    }

    #[test]
    fn mixed_field_types_are_preserved() {
        let err = StoreError::missing("abc", 3_u32);
        assert_eq!(err.to_string(), "missing abc after 3 attempts");
    }

    #[test]
    fn unit_variant_gets_a_constructor() {
        assert_eq!(StoreError::duplicate(), StoreError::Duplicate);
        assert_eq!(StoreError::Duplicate.to_string(), "duplicate entry");
    }
}
