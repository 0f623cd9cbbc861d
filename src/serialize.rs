/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Canonical byte encoding fed to the hash functions
//!
//! Raw bytes pass through untouched, scalars and point coordinates become
//! fixed-width 32-byte big-endian, and sequences are flattened in order.
//! There is no framing of any kind: the encoding is injective only over
//! the fixed call shapes used by this protocol (the challenge tuple, the
//! ring, and the stealth derivation pair). It is not a self-describing
//! format and must not be treated as one.
//!
//! Byte-for-byte agreement with the ledger's packed encoding is a hard
//! requirement; a single reordered or reframed field makes every
//! withdrawal unverifiable on-chain.

use crate::curve::{Scalar, Point};

///An order-preserving byte-buffer builder.
///
///```
///use heiring::serialize::Serializer;
///use heiring::curve::random_point;
///
///let point = random_point();
///let bytes = Serializer::new()
///    .bytes(b"some message")
///    .point(&point)
///    .finish();
///```
pub struct Serializer {
    buffer: Vec<u8>

} impl Serializer {
    pub fn new() -> Self {
        return Self{buffer: Vec::new()}
    }

    ///Append raw bytes as-is.
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buffer.extend_from_slice(bytes);
        return self
    }

    ///Append a scalar as 32 big-endian bytes.
    pub fn scalar(mut self, scalar: &Scalar) -> Self {
        self.buffer.extend_from_slice(&scalar.to_bytes());
        return self
    }

    ///Append a point as x then y, 32 big-endian bytes each.
    pub fn point(mut self, point: &Point) -> Self {
        self.buffer.extend_from_slice(&point.x().to_bytes());
        self.buffer.extend_from_slice(&point.y().to_bytes());
        return self
    }

    ///Append a sequence of points in order.
    pub fn points(self, points: &[Point]) -> Self {
        let mut serializer = self;
        for point in points {
            serializer = serializer.point(point);
        }
        return serializer
    }

    pub fn finish(self) -> Vec<u8> {
        return self.buffer
    }

} impl Default for Serializer {
    fn default() -> Self {
        return Self::new()
    }
}
