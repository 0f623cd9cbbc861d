/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! alt_bn128 field and curve arithmetic
//!
//! The curve is y² = x³ + 3 over the prime field P, with the fixed
//! generator G = (1, 2). Scalars are reduced against the group order N,
//! field elements against P. The two moduli are distinct types on purpose:
//! reducing a value against the wrong modulus is the classic way to break
//! agreement with the on-chain verifier.

use std::ops::{Add, Sub, Mul};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{thread_rng, Rng};
use serde::{Serialize, Deserialize};
use zeroize::Zeroize;

use crate::errors::{CurveError, SerializationError};
#[cfg(feature = "to_bytes")]
use crate::tobytes::ToBytes;

///Search bound for `scalar_to_point`. Roughly half of all residues are
///quadratic residues, so anything past a handful of tries means the input
///digest is corrupted rather than unlucky.
const MAX_POINT_SEARCH: usize = 256;

lazy_static! {
    ///The alt_bn128 base field prime P.
    pub static ref FIELD_MODULUS: BigUint = BigUint::parse_bytes(
        b"21888242871839275222246405745257275088696311157297823662689037894645226208583", 10
    ).unwrap();

    ///The order N of the group generated by G.
    pub static ref GROUP_ORDER: BigUint = BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617", 10
    ).unwrap();

    ///(P + 1) / 4. Since P ≡ 3 (mod 4), beta^((P+1)/4) is the principal
    ///square root of beta whenever beta is a quadratic residue.
    static ref SQRT_EXP: BigUint = BigUint::parse_bytes(
        b"5472060717959818805561601436314318772174077789324455915672259473661306552146", 10
    ).unwrap();

    ///The curve constant b in y² = x³ + b.
    static ref CURVE_B: FieldElement = FieldElement(BigUint::from(3u8));

    ///The fixed generator (1, 2).
    pub static ref G: Point = Point {
        x: FieldElement(BigUint::one()),
        y: FieldElement(BigUint::from(2u8))
    };
}

///An integer mod P, the base field prime.
///Point coordinates live here; ring signature scalars do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldElement(BigUint);

impl FieldElement {
    ///Reduce an arbitrary integer into [0, P).
    pub fn new(value: BigUint) -> Self {
        return Self(value % &*FIELD_MODULUS)
    }

    pub fn is_zero(&self) -> bool {
        return self.0.is_zero()
    }

    ///Fixed-width 32-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        return to_bytes32(&self.0)
    }

    ///Decode from exactly 32 big-endian bytes, rejecting values outside [0, P).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let value = decode_checked(bytes, &FIELD_MODULUS)?;
        return Ok(Self(value))
    }

    ///`0x`-prefixed 64-character hex, the ledger's numeric encoding.
    pub fn to_hex(&self) -> String {
        return encode_hex(&self.0)
    }

    ///Decode from `0x`-prefixed (or bare) 64-character hex.
    pub fn from_hex(hex_str: &str) -> Result<Self, SerializationError> {
        return Self::from_bytes(&decode_hex(hex_str)?)
    }

    ///Multiplicative inverse mod P, via Fermat's little theorem.
    ///Zero has no inverse.
    pub fn inverse(&self) -> Result<Self, CurveError> {
        if self.0.is_zero() {
            return Err(CurveError::InvalidOperand)
        }
        let exp = &*FIELD_MODULUS - BigUint::from(2u8);
        return Ok(Self(self.0.modpow(&exp, &FIELD_MODULUS)))
    }

    ///beta^((P+1)/4) mod P: the principal square root candidate.
    ///Only a real root when `self` is a quadratic residue; callers must
    ///check y² == beta themselves.
    fn sqrt_candidate(&self) -> Self {
        return Self(self.0.modpow(&SQRT_EXP, &FIELD_MODULUS))
    }

} impl Add for &FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: Self) -> FieldElement {
        return FieldElement((&self.0 + &rhs.0) % &*FIELD_MODULUS)
    }

} impl Sub for &FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: Self) -> FieldElement {
        //BigUint cannot go negative, so lift the left side by P first
        return FieldElement((&*FIELD_MODULUS + &self.0 - &rhs.0) % &*FIELD_MODULUS)
    }

} impl Mul for &FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: Self) -> FieldElement {
        return FieldElement((&self.0 * &rhs.0) % &*FIELD_MODULUS)
    }
}

///An integer mod N, the group order.
///Challenges, signature scalars, and secret keys live here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar(BigUint);

impl Scalar {
    ///Reduce an arbitrary integer into [0, N).
    pub fn new(value: BigUint) -> Self {
        return Self(value % &*GROUP_ORDER)
    }

    pub fn zero() -> Self {
        return Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        return self.0.is_zero()
    }

    ///Fixed-width 32-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        return to_bytes32(&self.0)
    }

    ///Decode from exactly 32 big-endian bytes, rejecting values outside [0, N).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let value = decode_checked(bytes, &GROUP_ORDER)?;
        return Ok(Self(value))
    }

    ///`0x`-prefixed 64-character hex, the ledger's numeric encoding.
    pub fn to_hex(&self) -> String {
        return encode_hex(&self.0)
    }

    ///Decode from `0x`-prefixed (or bare) 64-character hex.
    pub fn from_hex(hex_str: &str) -> Result<Self, SerializationError> {
        return Self::from_bytes(&decode_hex(hex_str)?)
    }

    ///Multiplicative inverse mod N, via Fermat's little theorem.
    ///Zero has no inverse.
    pub fn inverse(&self) -> Result<Self, CurveError> {
        if self.0.is_zero() {
            return Err(CurveError::InvalidOperand)
        }
        let exp = &*GROUP_ORDER - BigUint::from(2u8);
        return Ok(Self(self.0.modpow(&exp, &GROUP_ORDER)))
    }

    pub(crate) fn value(&self) -> &BigUint {
        return &self.0
    }

} impl Add for &Scalar {
    type Output = Scalar;
    fn add(self, rhs: Self) -> Scalar {
        return Scalar((&self.0 + &rhs.0) % &*GROUP_ORDER)
    }

} impl Sub for &Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Self) -> Scalar {
        //the closing scalar of a signature is computed through here:
        //lifting by N keeps the result in [0, N) without a signed detour
        return Scalar((&*GROUP_ORDER + &self.0 - &rhs.0) % &*GROUP_ORDER)
    }

} impl Mul for &Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Self) -> Scalar {
        return Scalar((&self.0 * &rhs.0) % &*GROUP_ORDER)
    }

} impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        //best effort: BigUint offers no in-place wipe of its limbs
        self.0 = BigUint::zero();
    }
}

///An affine point on the curve.
///
///There is no representation for the point at infinity; operations which
///would produce it fail with `CurveError::InvalidOperand` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    x: FieldElement,
    y: FieldElement

} impl Point {
    ///Build a point from coordinates, checking curve membership.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, CurveError> {
        if !on_curve(&x, &y) {
            return Err(CurveError::PointNotOnCurve)
        }
        return Ok(Self{x, y})
    }

    pub fn x(&self) -> &FieldElement {
        return &self.x
    }

    pub fn y(&self) -> &FieldElement {
        return &self.y
    }

    ///Both coordinates in the ledger's hex encoding, x first.
    pub fn to_hex(&self) -> [String; 2] {
        return [self.x.to_hex(), self.y.to_hex()]
    }

    ///Decode a coordinate pair from hex, checking curve membership.
    pub fn from_hex(x: &str, y: &str) -> Result<Self, CurveError> {
        let x = FieldElement::from_hex(x).map_err(|_| CurveError::PointNotOnCurve)?;
        let y = FieldElement::from_hex(y).map_err(|_| CurveError::PointNotOnCurve)?;
        return Self::new(x, y)
    }
}

///Check the curve equation y² ≡ x³ + 3 (mod P).
pub fn on_curve(x: &FieldElement, y: &FieldElement) -> bool {
    let x_cubed = &(x * x) * x;
    return y * y == &x_cubed + &*CURVE_B
}

///Affine point addition.
///
///Adding a point to its own negation has no representable result and
///fails with `InvalidOperand`.
pub fn add(p1: &Point, p2: &Point) -> Result<Point, CurveError> {
    if p1.x == p2.x {
        if p1.y == p2.y {
            return double(p1)
        }
        //antipodal points sum to infinity
        return Err(CurveError::InvalidOperand)
    }

    let slope = &(&p2.y - &p1.y) * &(&p2.x - &p1.x).inverse()?;
    return Ok(chord_intersection(&slope, &p1.x, &p2.x, p1))
}

///Affine point doubling.
fn double(p: &Point) -> Result<Point, CurveError> {
    if p.y.is_zero() {
        return Err(CurveError::InvalidOperand)
    }

    let three = FieldElement::new(BigUint::from(3u8));
    let two_y = &p.y + &p.y;
    let slope = &(&three * &(&p.x * &p.x)) * &two_y.inverse()?;
    return Ok(chord_intersection(&slope, &p.x, &p.x, p))
}

///Third intersection of the chord/tangent with the curve, mirrored.
fn chord_intersection(slope: &FieldElement, x1: &FieldElement, x2: &FieldElement, p1: &Point) -> Point {
    let x = &(slope * slope) - &(x1 + x2);
    let y = &(slope * &(&p1.x - &x)) - &p1.y;
    return Point{x, y}
}

///Double-and-add scalar multiplication.
///
///Zero scalars are rejected: the result would be the point at infinity,
///which has no representation here. A zero scalar reaching this function
///means a broken caller, not bad luck.
pub fn mul(p: &Point, s: &Scalar) -> Result<Point, CurveError> {
    if s.is_zero() {
        return Err(CurveError::InvalidOperand)
    }

    let mut acc: Option<Point> = None;
    for i in (0..s.value().bits()).rev() {
        if let Some(point) = acc.take() {
            acc = Some(double(&point)?);
        }
        if s.value().bit(i) {
            acc = match acc.take() {
                Some(point) => Some(add(&point, p)?),
                None => Some(p.clone())
            };
        }
    }
    return acc.ok_or(CurveError::InvalidOperand)
}

///Scalar multiplication of the generator G.
pub fn mul_g(s: &Scalar) -> Result<Point, CurveError> {
    return mul(&G, s)
}

///Given x, return (beta, y) where beta = x³ + 3 and y is the principal
///square root candidate of beta. y is only a real root when beta is a
///quadratic residue; the caller checks y² == beta.
pub fn eval_curve(x: &FieldElement) -> (FieldElement, FieldElement) {
    let beta = &(&(x * x) * x) + &*CURVE_B;
    let y = beta.sqrt_candidate();
    return (beta, y)
}

///Map a scalar to a curve point by incrementing search: walk x, x+1, …
///(mod N, exactly as the ledger's `intToPoint` does) until x³ + 3 is a
///quadratic residue, and take the principal root as y.
///
///The search is iterative and bounded so that a corrupted digest fails
///loudly instead of spinning.
pub fn scalar_to_point(s: &Scalar) -> Result<Point, CurveError> {
    let mut x = s.value().clone();

    for _ in 0..MAX_POINT_SEARCH {
        //x < N < P, so no reduction is lost here
        let candidate = FieldElement::new(x.clone());
        let (beta, y) = eval_curve(&candidate);

        if &y * &y == beta {
            return Ok(Point{x: candidate, y})
        }
        x = (x + BigUint::one()) % &*GROUP_ORDER;
    }
    return Err(CurveError::NoCurvePointFound)
}

///Return a uniformly random nonzero scalar from the thread CSPRNG.
pub fn random_scalar() -> Scalar {
    loop {
        let mut scalar_bytes = [0u8; 32];
        thread_rng().fill(&mut scalar_bytes[..]);
        let scalar = Scalar::new(BigUint::from_bytes_be(&scalar_bytes));
        if !scalar.is_zero() {
            return scalar
        }
    }
}

///Return a random point on the curve.
pub fn random_point() -> Point {
    return mul_g(&random_scalar())
        .expect("nonzero scalar times G cannot reach infinity")
}

///Left-pad a big integer to 32 big-endian bytes.
fn to_bytes32(value: &BigUint) -> [u8; 32] {
    let raw = value.to_bytes_be();
    let mut bytes = [0u8; 32];
    bytes[32 - raw.len()..].copy_from_slice(&raw);
    return bytes
}

///Decode exactly 32 big-endian bytes into an integer below `modulus`.
fn decode_checked(bytes: &[u8], modulus: &BigUint) -> Result<BigUint, SerializationError> {
    if bytes.len() != 32 {
        return Err(SerializationError::DecodingError)
    }
    let value = BigUint::from_bytes_be(bytes);
    if &value >= modulus {
        return Err(SerializationError::DecodingError)
    }
    return Ok(value)
}

fn encode_hex(value: &BigUint) -> String {
    return format!("0x{}", hex::encode(to_bytes32(value)))
}

fn decode_hex(hex_str: &str) -> Result<Vec<u8>, SerializationError> {
    let digits = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if digits.len() != 64 {
        return Err(SerializationError::DecodingError)
    }
    return hex::decode(digits).map_err(|_| SerializationError::DecodingError)
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(Scalar::to_bytes(self).to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return Scalar::from_bytes(bytes)
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Point {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok([self.x.to_bytes(), self.y.to_bytes()].concat())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 64 {
            return Err(SerializationError::DecodingError)
        }

        let x = FieldElement::from_bytes(&bytes[0..32])?;
        let y = FieldElement::from_bytes(&bytes[32..64])?;
        return Point::new(x, y).map_err(|_| SerializationError::DecodingError)
    }
}
