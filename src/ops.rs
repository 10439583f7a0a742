//! Arithmetic operator surface.
//!
//! `&a + &b`, `&a - &b`, `&a * &b` and `&a / &b` broadcast both operands to
//! their common shape. Since shapes may not be compatible, every operator
//! yields a [`Result`]. Viewers are materialized first.

use crate::array::Array;
use crate::broadcast::{broadcast_binary, BinaryOp};
use crate::element::Element;
use crate::view::Viewer;
use crate::Result;
use std::ops::{Add, Div, Mul, Sub};

/// Broadcasting elementwise sum.
pub fn add<T: Element>(a: &Array<T>, b: &Array<T>) -> Result<Array<T>> {
    broadcast_binary(a, b, BinaryOp::Add)
}

/// Broadcasting elementwise difference.
pub fn sub<T: Element>(a: &Array<T>, b: &Array<T>) -> Result<Array<T>> {
    broadcast_binary(a, b, BinaryOp::Sub)
}

/// Broadcasting elementwise product.
pub fn mul<T: Element>(a: &Array<T>, b: &Array<T>) -> Result<Array<T>> {
    broadcast_binary(a, b, BinaryOp::Mul)
}

/// Broadcasting elementwise quotient.
pub fn div<T: Element>(a: &Array<T>, b: &Array<T>) -> Result<Array<T>> {
    broadcast_binary(a, b, BinaryOp::Div)
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Element> $trait<&Array<T>> for &Array<T> {
            type Output = Result<Array<T>>;

            fn $method(self, rhs: &Array<T>) -> Result<Array<T>> {
                broadcast_binary(self, rhs, $op)
            }
        }

        impl<T: Element> $trait<&Viewer<'_, T>> for &Viewer<'_, T> {
            type Output = Result<Array<T>>;

            fn $method(self, rhs: &Viewer<'_, T>) -> Result<Array<T>> {
                broadcast_binary(&self.to_array(), &rhs.to_array(), $op)
            }
        }

        impl<T: Element> $trait<&Array<T>> for &Viewer<'_, T> {
            type Output = Result<Array<T>>;

            fn $method(self, rhs: &Array<T>) -> Result<Array<T>> {
                broadcast_binary(&self.to_array(), rhs, $op)
            }
        }
    };
}

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Sub);
impl_binary_op!(Mul, mul, BinaryOp::Mul);
impl_binary_op!(Div, div, BinaryOp::Div);
