// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported element data types.

/// Enumerates the numeric types a [`crate::Buffer`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DType {
    /// 32-bit signed integer.
    I32,
    /// 32-bit IEEE 754 floating point.
    F32,
}

impl DType {
    /// Returns the size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            DType::I32 => 4,
            DType::F32 => 4,
        }
    }

    /// Returns a human-readable label for this data type.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::I32 => "i32",
            DType::F32 => "f32",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// Scalar arithmetic for one element type.
///
/// Implemented for `i32` and `f32` only. Integer operations wrap on
/// overflow and divide truncating toward zero; float operations follow
/// IEEE 754 single precision.
pub trait Element: sealed::Sealed + Copy + PartialEq + PartialOrd + std::fmt::Debug + 'static {
    /// The runtime tag for this type.
    const DTYPE: DType;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    /// Divides; callers must have rejected a zero divisor.
    fn div(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
    fn abs(self) -> Self;

    /// True for `0` and for both signed float zeros.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        // i32::MIN / -1 wraps back to i32::MIN.
        self.wrapping_div(rhs)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.wrapping_abs()
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn neg(self) -> Self {
        -self
    }

    /// Clears the sign bit, matching a `0x7FFF_FFFF` mask exactly.
    #[inline(always)]
    fn abs(self) -> Self {
        f32::abs(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(<i32 as Element>::DTYPE, DType::I32);
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(DType::I32.size_bytes(), 4);
        assert_eq!(DType::F32.to_string(), "f32");
    }

    #[test]
    fn test_int_wraps() {
        assert_eq!(Element::add(i32::MAX, 1), i32::MIN);
        assert_eq!(Element::neg(i32::MIN), i32::MIN);
        assert_eq!(Element::abs(i32::MIN), i32::MIN);
        assert_eq!(Element::div(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_int_div_truncates_toward_zero() {
        assert_eq!(Element::div(-7, 2), -3);
        assert_eq!(Element::div(7, -2), -3);
    }

    #[test]
    fn test_float_abs_matches_mask() {
        for x in [-0.0f32, -1.5, 3.25, f32::NEG_INFINITY, f32::MIN_POSITIVE] {
            assert_eq!(Element::abs(x).to_bits(), x.to_bits() & 0x7FFF_FFFF);
        }
    }

    #[test]
    fn test_signed_zero_is_zero() {
        assert!(Element::is_zero(-0.0f32));
        assert!(Element::is_zero(0i32));
        assert!(!Element::is_zero(f32::MIN_POSITIVE));
    }

    #[test]
    fn test_dtype_serde_roundtrip() {
        let json = serde_json::to_string(&DType::I32).unwrap();
        let back: DType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DType::I32);
    }
}
