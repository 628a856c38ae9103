//! Operator overloads for [`FqElem`].
//!
//! Integers on either side are embedded through the prime subfield first.
//!
//! # Panics
//!
//! Every operator panics when its operands belong to different fields, and
//! division panics on a zero divisor. Use the `try_*` methods on
//! [`FqElem`] for the fallible forms.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use fqext_integers::Integer;

use crate::element::FqElem;

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<&FqElem> for &FqElem {
            type Output = FqElem;

            fn $method(self, rhs: &FqElem) -> FqElem {
                self.assert_same_field(rhs);
                self.$inner(rhs)
            }
        }

        impl $trait<FqElem> for FqElem {
            type Output = FqElem;

            fn $method(self, rhs: FqElem) -> FqElem {
                <&FqElem as $trait<&FqElem>>::$method(&self, &rhs)
            }
        }

        impl $trait<&FqElem> for FqElem {
            type Output = FqElem;

            fn $method(self, rhs: &FqElem) -> FqElem {
                <&FqElem as $trait<&FqElem>>::$method(&self, rhs)
            }
        }

        impl $trait<FqElem> for &FqElem {
            type Output = FqElem;

            fn $method(self, rhs: FqElem) -> FqElem {
                <&FqElem as $trait<&FqElem>>::$method(self, &rhs)
            }
        }

        impl $trait<i64> for &FqElem {
            type Output = FqElem;

            fn $method(self, rhs: i64) -> FqElem {
                self.$inner(&self.field().from_i64(rhs))
            }
        }

        impl $trait<i64> for FqElem {
            type Output = FqElem;

            fn $method(self, rhs: i64) -> FqElem {
                <&FqElem as $trait<i64>>::$method(&self, rhs)
            }
        }

        impl $trait<&FqElem> for i64 {
            type Output = FqElem;

            fn $method(self, rhs: &FqElem) -> FqElem {
                rhs.field().from_i64(self).$inner(rhs)
            }
        }

        impl $trait<FqElem> for i64 {
            type Output = FqElem;

            fn $method(self, rhs: FqElem) -> FqElem {
                <i64 as $trait<&FqElem>>::$method(self, &rhs)
            }
        }

        impl $trait<&Integer> for &FqElem {
            type Output = FqElem;

            fn $method(self, rhs: &Integer) -> FqElem {
                self.$inner(&self.field().from_integer(rhs))
            }
        }

        impl $trait<&Integer> for FqElem {
            type Output = FqElem;

            fn $method(self, rhs: &Integer) -> FqElem {
                <&FqElem as $trait<&Integer>>::$method(&self, rhs)
            }
        }

        impl $trait<&FqElem> for &Integer {
            type Output = FqElem;

            fn $method(self, rhs: &FqElem) -> FqElem {
                rhs.field().from_integer(self).$inner(rhs)
            }
        }

        impl $trait<FqElem> for &Integer {
            type Output = FqElem;

            fn $method(self, rhs: FqElem) -> FqElem {
                <&Integer as $trait<&FqElem>>::$method(self, &rhs)
            }
        }
    };
}

impl_binop!(Add, add, add_unchecked);
impl_binop!(Sub, sub, sub_unchecked);
impl_binop!(Mul, mul, mul_unchecked);
impl_binop!(Div, div, div_or_panic);

impl Neg for &FqElem {
    type Output = FqElem;

    fn neg(self) -> FqElem {
        self.neg_unchecked()
    }
}

impl Neg for FqElem {
    type Output = FqElem;

    fn neg(mut self) -> FqElem {
        self.neg_in_place();
        self
    }
}

macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $in_place:ident) => {
        impl $trait<&FqElem> for FqElem {
            fn $method(&mut self, rhs: &FqElem) {
                if let Err(e) = self.$in_place(rhs) {
                    panic!("{e}");
                }
            }
        }

        impl $trait<FqElem> for FqElem {
            fn $method(&mut self, rhs: FqElem) {
                <FqElem as $trait<&FqElem>>::$method(self, &rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add_in_place);
impl_assign_op!(SubAssign, sub_assign, sub_in_place);
impl_assign_op!(MulAssign, mul_assign, mul_in_place);
