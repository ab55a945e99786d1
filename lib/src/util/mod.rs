pub use as_num::AsNum;
pub use plain_enum::*;
pub use derive_new::new;
pub use failure::{bail, format_err, Error};
pub use halfskat_logging::{debug, error, info, warn};

pub trait TVerifiableByVerifyMacro {
    fn is_verify_true(&self) -> bool;
}

impl TVerifiableByVerifyMacro for bool {
    fn is_verify_true(&self) -> bool {
        *self
    }
}

impl<T> TVerifiableByVerifyMacro for Option<T> {
    fn is_verify_true(&self) -> bool {
        self.is_some()
    }
}

impl<TOk, TErr> TVerifiableByVerifyMacro for Result<TOk, TErr> {
    fn is_verify_true(&self) -> bool {
        self.is_ok()
    }
}

pub fn verify_internal<E: TVerifiableByVerifyMacro+std::fmt::Debug>(e: E, str_e: &str) -> E {
    assert!(e.is_verify_true(), "verify!({}): {:?}", str_e, e);
    e
}

#[macro_export]
macro_rules! verify {($e: expr) => {{
    $crate::util::verify_internal($e, stringify!($e))
}}}

#[macro_export]
macro_rules! unwrap {($e: expr) => {
    $crate::util::verify_internal($e, stringify!($e)).unwrap()
}}

#[macro_export]
macro_rules! if_then_some {
    ($cond: expr, $val: expr) => {
        if $cond {
            Some($val)
        } else {
            None
        }
    };
}

pub use crate::{if_then_some, unwrap, verify};

#[test]
fn test_verify() {
    verify!(Some(4));
    assert_eq!(unwrap!(Some(4)), 4);
}
