/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zeroize::Zeroize;

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::CurveError;
use crate::hashes::h1;
use crate::serialize::Serializer;
use crate::signature::ring_base_point;

///A Ring is the ordered list of stealth public keys a signer proves
///membership in.
///
///Order matters: the ring bytes are part of every hashed challenge, so a
///reordered ring is a different ring as far as the signature is concerned.
///Rings are borrowed read-only from the ledger for the duration of a
///sign or verify call.
///
///This is a wrapper type for `Vec<Point>`.
///The internal `Vec` can be accessed with `ring.0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ring(pub Vec<Point>);
impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Appends a public key to the ring.
    pub fn push(&mut self, value: Point) {
        self.0.push(value);
    }

    pub fn len(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///Decode a ring from the ledger's hex coordinate pairs.
    ///
    ///The ledger pads unfilled ring slots with (0, 0); those placeholders
    ///are dropped here, exactly as the production wallet drops them before
    ///scanning for its own key.
    pub fn from_wire(entries: &[[String; 2]]) -> Result<Self, CurveError> {
        let mut ring = Self::new();
        for [x, y] in entries {
            let x = FieldElement::from_hex(x).map_err(|_| CurveError::PointNotOnCurve)?;
            let y = FieldElement::from_hex(y).map_err(|_| CurveError::PointNotOnCurve)?;
            if x.is_zero() && y.is_zero() {
                continue;
            }
            ring.push(Point::new(x, y)?);
        }
        return Ok(ring)
    }

    ///Encode every member in the ledger's hex encoding.
    pub fn to_wire(&self) -> Vec<[String; 2]> {
        return self.0.iter().map(|point| point.to_hex()).collect()
    }

} impl Default for Ring {
    fn default() -> Self {
        return Self::new()
    }

} impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        return Self(points)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Ring {}

///The one-time key pair a depositor places in a ring.
/// * `secret`: the stealth secret key, h1(randomSecret ‖ recipientAddress)
/// * `public`: secret · G, the only value that ever reaches the ledger
///
///The pair is ephemeral: derived at deposit time, re-derived at withdrawal
///time from the same two inputs, and never persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StealthKeys {
    pub secret: Scalar,
    pub public: Point

} impl StealthKeys {
    ///Derive the one-time pair from a random secret and the recipient's
    ///address. Depositor and withdrawer both recompute this identically,
    ///so the real recipient never appears on-chain.
    pub fn derive(random_secret: &[u8], recipient: &[u8]) -> Result<Self, CurveError> {
        let secret = h1(
            &Serializer::new()
                .bytes(random_secret)
                .bytes(recipient)
                .finish()
        );
        return Self::from_secret(secret)
    }

    ///Build the pair from an existing secret scalar.
    pub fn from_secret(secret: Scalar) -> Result<Self, CurveError> {
        let public = mul_g(&secret)?;
        return Ok(Self{secret, public})
    }

    ///The key image of this key against a specific ring:
    ///h2(serialized ring) multiplied by the secret.
    ///
    ///Deterministic in (secret, ring), which is what makes it usable as a
    ///one-time nullifier: the same key signing against the same ring always
    ///produces the same image, without revealing which slot it holds.
    pub fn key_image(&self, ring: &Ring) -> Result<Point, CurveError> {
        return mul(&ring_base_point(ring)?, &self.secret)
    }

} impl Zeroize for StealthKeys {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }

} impl Drop for StealthKeys {
    fn drop(&mut self) {
        //clear the secret from memory to improve security
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for StealthKeys {}
