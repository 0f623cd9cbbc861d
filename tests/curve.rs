// SPDX short identifier: Unlicense

use num_bigint::BigUint;
use num_traits::{One, Zero};

use heiring::{
    common::*,
    hashes::h2
};

//reference key pair, shared with the on-chain test suite
const SECRET_HEX: &str = "0x1c28c75b7216693955b3ffe8c601fdfb6dd07b78600eeac48b9954d687090a87";
const PUBLIC_HEX: [&str; 2] = [
    "0x0fce6aeea309c9487431af3306b49df8f1de2183ac98c59a6e382c0cd56f3b6f",
    "0x232e5711e8424a93805b971c1f6be63aa74770f9648601e9bfdc4ad04c28f3bf"
];

fn reference_secret() -> Scalar {
    return Scalar::from_hex(SECRET_HEX).unwrap()
}

fn reference_public() -> Point {
    return Point::from_hex(PUBLIC_HEX[0], PUBLIC_HEX[1]).unwrap()
}

#[test]
fn mul_g_matches_reference_vector() {
    let public = mul_g(&reference_secret()).unwrap();

    assert_eq!(public, reference_public());
    assert_eq!(public.to_hex(), [PUBLIC_HEX[0].to_string(), PUBLIC_HEX[1].to_string()]);
}

#[test]
fn mul_matches_reference_vector() {
    let point = mul(&reference_public(), &reference_secret()).unwrap();

    let expected = Point::from_hex(
        "0x1e163d27197822cf07b6fc5a0950721b9f80a7810063c8fa82d7e8f744269aad",
        "0x10f82337d1a6fdb0ef44098d066147641e200e34ee6af2d6a4f3064420192f33"
    ).unwrap();
    assert_eq!(point, expected);
}

#[test]
fn add_matches_reference_vector() {
    let public = reference_public();
    let point = add(&public, &public).unwrap();

    let expected = Point::from_hex(
        "0x0726c08a475b0d980e2c0e2d6b92d010f6b4192bdf2c7a2014015504cf39b46c",
        "0x0cea253b7abbe43dbb05643f3a9ea936701bb77c10c442b59c1c323dbb8b4a89"
    ).unwrap();
    assert_eq!(point, expected);
}

#[test]
fn curve_membership() {
    let public = reference_public();
    assert!(on_curve(public.x(), public.y()));

    //the generator (1, 2)
    assert!(on_curve(G.x(), G.y()));

    //the ledger's empty-slot placeholder
    let zero = FieldElement::new(BigUint::zero());
    assert!(!on_curve(&zero, &zero));
}

#[test]
fn eval_curve_matches_reference_vector() {
    let x = FieldElement::from_hex(SECRET_HEX).unwrap();
    let (beta, y) = eval_curve(&x);

    assert_eq!(beta.to_hex(), "0x200c701ce7526ffeaafee056172fa3018a7f10c50513023488b17256bf9e029c");
    assert_eq!(y.to_hex(), "0x141238261eac80e90649f81745607b70d5776defe23adc09b3cba89a3b578ca8");
}

#[test]
fn scalar_to_point_matches_reference_vector() {
    //this x is already on the curve, so the search stops immediately
    let point = scalar_to_point(&reference_secret()).unwrap();

    assert_eq!(point.to_hex(), [
        SECRET_HEX.to_string(),
        "0x141238261eac80e90649f81745607b70d5776defe23adc09b3cba89a3b578ca8".to_string()
    ]);
}

#[test]
fn doubling_matches_mul_by_two() {
    for _ in 0..8 {
        let point = random_point();
        let doubled = add(&point, &point).unwrap();
        assert_eq!(doubled, mul(&point, &Scalar::new(BigUint::from(2u8))).unwrap());
    }
}

#[test]
fn antipodal_addition_is_rejected() {
    let point = random_point();
    let negated_y = &FieldElement::new(BigUint::zero()) - point.y();
    let negated = Point::new(point.x().clone(), negated_y).unwrap();

    assert_eq!(add(&point, &negated), Err(CurveError::InvalidOperand));
}

#[test]
fn zero_scalar_is_rejected() {
    let point = random_point();

    assert_eq!(mul(&point, &Scalar::zero()), Err(CurveError::InvalidOperand));
    assert_eq!(mul_g(&Scalar::zero()), Err(CurveError::InvalidOperand));
}

#[test]
fn scalar_inverse_round_trip() {
    let one = Scalar::new(BigUint::one());
    for _ in 0..8 {
        let scalar = random_scalar();
        assert_eq!(&scalar * &scalar.inverse().unwrap(), one);
    }
    assert!(Scalar::zero().inverse().is_err());
}

#[test]
fn hash_to_point_always_lands_on_curve() {
    for i in 0u8..32 {
        let point = h2(&[b"hash to point input ".as_slice(), &[i]].concat()).unwrap();
        assert!(on_curve(point.x(), point.y()));
    }
}

#[test]
fn hex_decoding_is_strict() {
    //swapped coordinates are not a curve point
    assert_eq!(
        Point::from_hex(PUBLIC_HEX[1], PUBLIC_HEX[0]),
        Err(CurveError::PointNotOnCurve)
    );

    //the group order itself is out of range for a scalar
    assert!(Scalar::from_hex(
        "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
    ).is_err());

    //wrong width
    assert!(Scalar::from_hex("0x01").is_err());
    assert!(Scalar::from_hex(SECRET_HEX).is_ok());
}

#[test]
fn wire_encoding_is_fixed_width() {
    for _ in 0..8 {
        let scalar = random_scalar();
        let encoded = scalar.to_hex();
        assert_eq!(encoded.len(), 66);
        assert!(encoded.starts_with("0x"));
        assert_eq!(Scalar::from_hex(&encoded).unwrap(), scalar);
    }
}

#[cfg(feature = "to_bytes")]
#[test]
fn to_bytes_round_trip() {
    let scalar = random_scalar();
    let serialized = ToBytes::to_bytes(&scalar).unwrap();
    assert_eq!(<Scalar as ToBytes>::from_bytes(&serialized).unwrap(), scalar);

    let point = random_point();
    let serialized = ToBytes::to_bytes(&point).unwrap();
    assert_eq!(<Point as ToBytes>::from_bytes(&serialized).unwrap(), point);
}
