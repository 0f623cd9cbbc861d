/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Heiswap's linkable ring signature
//!
//!A member of a deposit ring proves it owns one of the ring's stealth
//!keys — without revealing which one — and commits to a deterministic
//!key image that the ledger records as a one-time nullifier.

mod lsag;

pub use lsag::LSAGSignature;

pub(crate) use lsag::ring_base_point;
