//! Immutable exact fractions.
//!
//! A [`Fraction`] is the exact ratio of two arbitrary precision integers.
//! Values are normalized at construction and never mutated afterwards.

use num_traits::{One, Zero};
use quotus_integers::Integer;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An immutable arbitrary precision fraction.
///
/// Fractions are always stored in lowest terms with a non-negative
/// denominator; the sign lives in the numerator. The value zero is stored
/// as `0/0`, and any construction with a zero numerator or zero denominator
/// collapses to it — so "division by zero" at construction time silently
/// yields zero rather than failing (see [`Fraction::new`]).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Fraction {
    numerator: Integer,
    denominator: Integer,
}

impl Fraction {
    /// Creates a fraction from a numerator and denominator, normalized.
    ///
    /// A negative denominator moves its sign into the numerator, and the
    /// pair is reduced by its greatest common divisor. A zero numerator or
    /// a zero denominator both yield the canonical zero `0/0`: constructing
    /// `4/0` is not an error, it is the value zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        if numerator.is_zero() || denominator.is_zero() {
            return Self::zero();
        }
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let g = numerator.gcd(&denominator);
        Self {
            numerator: numerator / &g,
            denominator: denominator / &g,
        }
    }

    /// Creates a fraction with the given integer value (denominator 1).
    #[must_use]
    pub fn from_integer(value: Integer) -> Self {
        Self::new(value, Integer::one())
    }

    /// Creates a fraction from i64 numerator and denominator.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator.
    ///
    /// Never negative; zero exactly when the fraction is zero.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this fraction has an integer value.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.is_zero() || self.denominator.is_one()
    }

    /// Converts to an integer if the value is integral.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the sign of the fraction: -1, 0, or 1.
    ///
    /// The denominator is never negative, so the numerator alone decides.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Adds two fractions exactly.
    ///
    /// The canonical zero stores a zero denominator and must stay out of
    /// the cross products, so a zero operand returns the other operand.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let numerator =
            &self.numerator * &other.denominator + &self.denominator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;
        Self::new(numerator, denominator)
    }

    /// Sums a sequence of optional fractions.
    ///
    /// An empty slice sums to the canonical zero. An absent element makes
    /// the whole sum absent: the first element is checked before any
    /// arithmetic happens, then each subsequent element in turn.
    #[must_use]
    pub fn sum_all(terms: &[Option<Fraction>]) -> Option<Fraction> {
        let Some(first) = terms.first() else {
            return Some(Self::zero());
        };
        let mut sum = first.clone()?;
        for term in &terms[1..] {
            sum = sum.add(term.as_ref()?);
        }
        Some(sum)
    }

    /// Subtracts the absolute value of `other`.
    ///
    /// This computes `self + (-|other|)`: the subtrahend's sign is
    /// discarded before negating, so when `other` is negative the result
    /// differs from `self - other` (`5.subtract(-3)` is `2`, while
    /// `5 - (-3)` is `8`). Kept under this name for compatibility with the
    /// historical contract; use the `-` operator for conventional
    /// subtraction.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&-other.abs())
    }

    /// Multiplies two fractions exactly.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;
        Self::new(numerator, denominator)
    }

    /// Divides by `other`, defined as multiplication by its [`invert`].
    ///
    /// Dividing by zero therefore yields zero, not an error.
    ///
    /// [`invert`]: Fraction::invert
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.invert())
    }

    /// Returns the reciprocal, swapping numerator and denominator.
    ///
    /// The zero value inverts to itself.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.numerator.abs(), self.denominator.clone())
    }

    /// Raises to an integer power, which may be zero or negative.
    ///
    /// `a^0` is `1` for every `a`, and a negative exponent inverts before
    /// raising: `a^-e = (1/a)^e`. The zero value raised to any non-zero
    /// power is zero.
    #[must_use]
    pub fn pow(&self, exponent: i32) -> Self {
        let e = exponent.unsigned_abs();
        if exponent == 0 {
            Self::one()
        } else if exponent < 0 {
            Self::new(self.denominator.pow(e), self.numerator.pow(e))
        } else {
            Self::new(self.numerator.pow(e), self.denominator.pow(e))
        }
    }

    /// Returns the larger of the two fractions; a tie goes to `other`.
    ///
    /// Shadows [`Ord::max`], whose tie-break differs.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        if self.cmp(other) == Ordering::Greater {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// Returns the smaller of the two fractions; a tie goes to `other`.
    ///
    /// Shadows [`Ord::min`], whose tie-break differs.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        if self.cmp(other) == Ordering::Less {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// Checks value equality against a possibly absent fraction.
    ///
    /// Absent compares unequal; this never fails. Storage is canonical, so
    /// structural equality of the pair is value equality.
    #[must_use]
    pub fn is_equal_to(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiplication: a/b < c/d iff a*d < c*b, valid because
        // denominators are never negative. The canonical zero stores a zero
        // denominator and is compared by sign instead.
        if self.is_zero() || other.is_zero() {
            return self.signum().cmp(&other.signum());
        }
        let lhs = &self.numerator * &other.denominator;
        let rhs = &self.denominator * &other.numerator;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self {
            numerator: Integer::zero(),
            denominator: Integer::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self {
            numerator: Integer::one(),
            denominator: Integer::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({})", self)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            write!(f, "0")
        } else if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{} / {}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Fraction::add(&self, &rhs)
    }
}

impl Add<&Fraction> for Fraction {
    type Output = Self;

    fn add(self, rhs: &Fraction) -> Self::Output {
        Fraction::add(&self, rhs)
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        Fraction::add(self, rhs)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Fraction::add(&self, &-rhs)
    }
}

impl Sub<&Fraction> for Fraction {
    type Output = Self;

    fn sub(self, rhs: &Fraction) -> Self::Output {
        Fraction::add(&self, &-rhs)
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        Fraction::add(self, &-rhs)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Fraction::multiply(&self, &rhs)
    }
}

impl Mul<&Fraction> for Fraction {
    type Output = Self;

    fn mul(self, rhs: &Fraction) -> Self::Output {
        Fraction::multiply(&self, rhs)
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        Fraction::multiply(self, rhs)
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Fraction::divide(&self, &rhs)
    }
}

impl Div<&Fraction> for Fraction {
    type Output = Self;

    fn div(self, rhs: &Fraction) -> Self::Output {
        Fraction::divide(&self, rhs)
    }
}

impl Div for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        Fraction::divide(self, rhs)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Fraction::new(-self.numerator, self.denominator)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Fraction::new(-&self.numerator, self.denominator.clone())
    }
}

impl From<Integer> for Fraction {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::new(value))
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Self::from_integer(Integer::from(value))
    }
}
