/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Field and elliptic curve arithmetic errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    ///The coordinates are outside the field or do not satisfy the curve equation.
    PointNotOnCurve,
    ///The operation would produce a degenerate result,
    ///such as multiplying by a zero scalar or adding antipodal points.
    ///There is no representation for the point at infinity in this crate.
    InvalidOperand,
    ///Hash-to-point exhausted its search bound.
    ///If this ever surfaces, the digest or the modulus is corrupted.
    NoCurvePointFound

} impl Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::PointNotOnCurve => "Point is not on the curve.",
            Self::InvalidOperand => "Operand would produce a degenerate point.",
            Self::NoCurvePointFound => "No curve point found within the search bound."
        })
    }

} impl Error for CurveError {}

///Ring signature errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The challenge chain does not close back to `c_0`.
    ///Terminal and non-retryable: bad message binding, wrong ring snapshot, or tampered fields.
    VerificationFailed,
    ///The given signature is malformed in some way,
    ///or the parameters are incorrect/inconsistent.
    Malformed,
    ///Arithmetic failed underneath the signature.
    Curve(CurveError)

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self{
            Self::VerificationFailed => write!(f, "This signature is invalid."),
            Self::Malformed => write!(f, "Malformed signature or parameters."),
            Self::Curve(err) => write!(f, "{err}")
        }
    }

} impl Error for SignatureError {

} impl From<CurveError> for SignatureError {
    fn from(err: CurveError) -> Self {
        return Self::Curve(err)
    }
}

///Withdrawal token errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    ///The token does not parse into exactly the expected delimited fields.
    Malformed,
    ///The derived stealth key matches no entry in the fetched ring.
    ///Usually a wrong connected account or a stale token.
    SignerNotInRing,
    ///Signing the withdrawal failed.
    Signature(SignatureError),
    ///Arithmetic failed underneath the token flow.
    Curve(CurveError)

} impl Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self{
            Self::Malformed => write!(f, "Malformed token."),
            Self::SignerNotInRing => write!(f, "The derived key matches no ring entry."),
            Self::Signature(err) => write!(f, "{err}"),
            Self::Curve(err) => write!(f, "{err}")
        }
    }

} impl Error for TokenError {

} impl From<CurveError> for TokenError {
    fn from(err: CurveError) -> Self {
        return Self::Curve(err)
    }

} impl From<SignatureError> for TokenError {
    fn from(err: SignatureError) -> Self {
        return Self::Signature(err)
    }
}
