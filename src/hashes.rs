/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The two protocol hash functions
//!
//! `h1` maps bytes to a group-order scalar, `h2` maps bytes to a curve
//! point. Both take the canonical `serialize` encoding as input. The
//! digest is Keccak-256 — the ledger's native hash — and substituting
//! anything that is not bit-identical (including NIST SHA3-256, which
//! pads differently) breaks on-chain agreement.

use num_bigint::BigUint;
use sha3::{Digest, Keccak256};

use crate::curve::{Scalar, Point, scalar_to_point};
use crate::errors::CurveError;

///Hash bytes to a group-order scalar: Keccak-256 reduced mod N.
pub fn h1(msg: &[u8]) -> Scalar {
    let digest = Keccak256::digest(msg);
    return Scalar::new(BigUint::from_bytes_be(digest.as_slice()))
}

///Hash bytes to a curve point: `h1`, then the bounded incrementing
///search of `scalar_to_point`.
pub fn h2(msg: &[u8]) -> Result<Point, CurveError> {
    return scalar_to_point(&h1(msg))
}
