/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Withdrawal tokens and the withdrawal-side key recovery flow
//!
//! A token is the compact string handed to the depositor:
//! `hei-<amount>-<ringIndex>-<randomSecret>`. The amount and ring index
//! are opaque here — the caller uses them to fetch the right ring from
//! the ledger — while the random-secret field feeds stealth key
//! re-derivation. The secret's *literal* string bytes are hashed, because
//! that is exactly what the wallet hashed at deposit time.

use std::fmt::Display;

use crate::internal_common::*;
use crate::signature::LSAGSignature;
use crate::errors::TokenError;

///A parsed withdrawal token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeiToken {
    ///Denomination field, as written in the token.
    pub amount: String,
    ///Ring slot field, as written in the token.
    pub ring_index: String,
    ///The deposit-time random secret, hex-encoded.
    pub random_secret: String

} impl HeiToken {
    pub const PREFIX: &'static str = "hei";

    ///Parse a token string. Anything other than the `hei` prefix followed
    ///by exactly three `-`-delimited fields is `TokenError::Malformed`.
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let fields: Vec<&str> = token.split('-').collect();
        if fields.len() != 4 || fields[0] != Self::PREFIX {
            return Err(TokenError::Malformed)
        }

        return Ok(Self{
            amount: fields[1].to_string(),
            ring_index: fields[2].to_string(),
            random_secret: fields[3].to_string()
        })
    }

    ///Re-derive the stealth key pair for this token and a recipient
    ///address. Deterministic: the same token and address always recover
    ///the same pair.
    pub fn recover_keys(&self, recipient: &[u8]) -> Result<StealthKeys, TokenError> {
        return Ok(StealthKeys::derive(self.random_secret.as_bytes(), recipient)?)
    }

    ///The full withdrawal flow on the signing side: recover the stealth
    ///keys, locate our slot in the fetched ring, and sign `msg`.
    ///
    ///`msg` must bind the withdrawal to its destination (the ledger signs
    ///over it too); a signature over an unbound message is stealable.
    pub fn sign_withdrawal(
        &self, recipient: &[u8], ring: &Ring, msg: &[u8]
    ) -> Result<LSAGSignature, TokenError> {
        let keys = self.recover_keys(recipient)?;
        let signer_index = locate_signer(ring, &keys)?;
        return Ok(LSAGSignature::sign(ring, &keys.secret, signer_index, msg)?)
    }

} impl Display for HeiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(
            f, "{}-{}-{}-{}",
            Self::PREFIX, self.amount, self.ring_index, self.random_secret
        )
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for HeiToken {}

///Find the ring slot holding our stealth public key, by linear scan and
///point equality.
///
///No match is the expected `SignerNotInRing` outcome — wrong connected
///account or a stale token — and the caller must stop before attempting
///to sign.
pub fn locate_signer(ring: &Ring, keys: &StealthKeys) -> Result<usize, TokenError> {
    return match ring.0.iter().position(|member| member == &keys.public) {
        Some(signer_index) => Ok(signer_index),
        None => Err(TokenError::SignerNotInRing)
    }
}
