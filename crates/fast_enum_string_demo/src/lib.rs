//! Enums whose `ToStringFast` implementations come from this crate's build script.
//!
//! ```rust
//! use fast_enum_string_demo::{TestEnum, ToStringFast};
//!
//! assert_eq!(TestEnum::R.to_string_fast(), "R");
//! ```

include!(concat!(env!("OUT_DIR"), "/enum_strings.rs"));

pub use generated::{ToStringFast, UnsupportedEnumValue};

pub mod shapes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestEnum {
    Q,
    W,
    E,
    R,
    T,
    Y,
}

impl TestEnum {
    pub const ALL: [TestEnum; 6] = [
        TestEnum::Q,
        TestEnum::W,
        TestEnum::E,
        TestEnum::R,
        TestEnum::T,
        TestEnum::Y,
    ];
}

pub mod http {
    pub mod status {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Class {
            Informational,
            Success,
            Redirection,
            ClientError,
            ServerError,
        }

        impl Class {
            pub fn of(code: u16) -> Option<Class> {
                match code {
                    100..=199 => Some(Class::Informational),
                    200..=299 => Some(Class::Success),
                    300..=399 => Some(Class::Redirection),
                    400..=499 => Some(Class::ClientError),
                    500..=599 => Some(Class::ServerError),
                    _ => None,
                }
            }
        }
    }
}

pub mod keywords {
    #[allow(non_camel_case_types)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Token {
        r#type,
        r#match,
        Ident,
    }
}

/// No values; its lookup is only the catch-all arm.
#[derive(Debug)]
pub enum Never {}
