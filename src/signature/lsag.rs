/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zeroize::Zeroize;

use crate::internal_common::*;

///The signature-specific base point: h2 over the serialized ring.
///Every signature against the same ring shares this point, which is what
///makes key images comparable across withdrawals.
pub(crate) fn ring_base_point(ring: &Ring) -> Result<Point, CurveError> {
    return h2(&Serializer::new().points(&ring.0).finish())
}

///The challenge scalar: h1 over the fixed tuple
///(ring, key image, message, z1, z2).
fn challenge(ring: &Ring, key_image: &Point, msg: &[u8], z1: &Point, z2: &Point) -> Scalar {
    return h1(
        &Serializer::new()
            .points(&ring.0)
            .point(key_image)
            .bytes(msg)
            .point(z1)
            .point(z2)
            .finish()
    )
}

///A linkable ring signature (LSAG) over a withdrawal message.
///
///LSAG stands for "Linkable Spontaneous Anonymous Group (signature)".
///
///The triple (c_0, s, key image) is exactly what the ledger's verifier
///consumes. Two signatures from the same secret key against the same ring
///carry the same `key_image`, which is how the ledger detects a second
///withdrawal attempt without ever learning which ring slot signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LSAGSignature {
    pub key_image: Point,
    c_0: Scalar,
    s: Vec<Scalar>,

} impl LSAGSignature {
    ///Create a signature over `msg` for a ring of public keys, given the
    ///secret key held at `signer_index`.
    ///
    ///`mul_g(secret_key) == ring.0[signer_index]` is the caller's
    ///precondition; locating the index (or learning that no slot matches)
    ///is the withdrawal flow's job, not this primitive's. A ring smaller
    ///than two or an out-of-range index is rejected as `Malformed`.
    pub fn sign(
        ring: &Ring, secret_key: &Scalar, signer_index: usize, msg: &[u8]
    ) -> Result<Self, SignatureError> {
        let n = ring.0.len();
        if n < 2 || signer_index >= n {
            return Err(SignatureError::Malformed)
        }

        let h = ring_base_point(ring)?;
        let key_image = mul(&h, secret_key)?;

        let mut c: Vec<Scalar> = vec![Scalar::zero(); n];
        let mut s: Vec<Scalar> = vec![Scalar::zero(); n];

        //fresh nonce. reusing or predicting u leaks the secret key, the
        //same way it does for any Schnorr-family scheme
        let mut u = random_scalar();
        c[(signer_index + 1) % n] = challenge(
            ring, &key_image, msg, &mul_g(&u)?, &mul(&h, &u)?
        );

        //walk forward from the slot after the signer, wrapping around,
        //chaining each challenge into the next
        let mut i = (signer_index + 1) % n;
        while i != signer_index {
            s[i] = random_scalar();

            let z1 = add(&mul_g(&s[i])?, &mul(&ring.0[i], &c[i])?)?;
            let z2 = add(&mul(&h, &s[i])?, &mul(&key_image, &c[i])?)?;

            c[(i + 1) % n] = challenge(ring, &key_image, msg, &z1, &z2);
            i = (i + 1) % n;
        }

        //close the ring at the signer's slot: s[j] = u - sk·c[j] (mod N),
        //already normalized into [0, N) by the Sub impl
        s[signer_index] = &u - &(secret_key * &c[signer_index]);

        u.zeroize();

        return Ok(Self{
            key_image,
            c_0: c[0].clone(),
            s
        })
    }

    ///Check this signature against a ring and message.
    ///
    ///Recomputes the whole challenge chain from `c_0` and accepts only if
    ///the final challenge closes back to `c_0`. Pure and deterministic:
    ///this must compute exactly what the ledger-side verifier computes,
    ///byte for byte.
    ///
    ///Returns `Ok()` if the signature is valid,
    ///or `Err(SignatureError)` if it's invalid or an error occurred.
    pub fn verify(&self, ring: &Ring, msg: &[u8]) -> Result<(), SignatureError> {
        let n = ring.0.len();
        if n < 2 || self.s.len() != n {
            return Err(SignatureError::Malformed)
        }

        let h = ring_base_point(ring)?;

        //travel around the ring
        let mut c = self.c_0.clone();
        for i in 0..n {
            let z1 = add(&mul_g(&self.s[i])?, &mul(&ring.0[i], &c)?)?;
            let z2 = add(&mul(&h, &self.s[i])?, &mul(&self.key_image, &c)?)?;

            c = challenge(ring, &self.key_image, msg, &z1, &z2);
        }

        //check if we end up back where we started
        return match c == self.c_0 {
            true => Ok(()),
            false => Err(SignatureError::VerificationFailed)
        }
    }

    ///The signature in the ledger's wire encoding:
    ///(c_0, key image coordinate pair, s array), every value `0x`-prefixed
    ///32-byte big-endian hex.
    pub fn to_hex(&self) -> (String, [String; 2], Vec<String>) {
        return (
            self.c_0.to_hex(),
            self.key_image.to_hex(),
            self.s.iter().map(|s_i| s_i.to_hex()).collect()
        )
    }

    ///Decode a signature from the ledger's wire encoding.
    pub fn from_hex(
        c_0: &str, key_image: &[String; 2], s: &[String]
    ) -> Result<Self, SignatureError> {
        let key_image = Point::from_hex(&key_image[0], &key_image[1])?;
        let c_0 = Scalar::from_hex(c_0)
            .map_err(|_| SignatureError::Malformed)?;
        let s = s.iter()
            .map(|s_i| Scalar::from_hex(s_i))
            .collect::<Result<Vec<Scalar>, _>>()
            .map_err(|_| SignatureError::Malformed)?;

        return Ok(Self{key_image, c_0, s})
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for LSAGSignature {}
