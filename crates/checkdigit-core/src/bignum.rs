//! Minimal unsigned arbitrary-precision integer for radix conversion.
//!
//! [`Natural`] supports exactly what base-256 ↔ base-58 conversion needs:
//! construction from big-endian bytes, multiply-and-add by a small constant,
//! division with remainder by a small constant, and export back to minimal
//! big-endian bytes. Inputs are tens of bytes, so schoolbook loops suffice.

/// Non-negative integer stored as base-256 limbs, least significant first.
///
/// The limb vector never carries high zero limbs; zero is the empty vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Natural {
    limbs: Vec<u8>,
}

impl Natural {
    /// Zero.
    pub(crate) fn zero() -> Self {
        Self::default()
    }

    /// Interprets `bytes` as a big-endian base-256 number.
    pub(crate) fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs: Vec<u8> = bytes.iter().rev().copied().collect();
        trim(&mut limbs);
        Self { limbs }
    }

    /// Returns `true` if the value is zero.
    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Replaces `self` with `self * mul + add`.
    pub(crate) fn mul_add_small(&mut self, mul: u32, add: u32) {
        let mut carry = u64::from(add);
        for limb in &mut self.limbs {
            let v = u64::from(*limb) * u64::from(mul) + carry;
            *limb = (v & 0xff) as u8;
            carry = v >> 8;
        }
        while carry > 0 {
            self.limbs.push((carry & 0xff) as u8);
            carry >>= 8;
        }
        trim(&mut self.limbs);
    }

    /// Divides `self` by `divisor` in place and returns the remainder.
    ///
    /// `divisor` must be non-zero; a zero divisor leaves `self` unchanged and
    /// returns 0.
    pub(crate) fn div_rem_small(&mut self, divisor: u32) -> u32 {
        if divisor == 0 {
            return 0;
        }
        let divisor = u64::from(divisor);
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let acc = (rem << 8) | u64::from(*limb);
            *limb = (acc / divisor) as u8;
            rem = acc % divisor;
        }
        trim(&mut self.limbs);
        rem as u32
    }

    /// Returns the minimal big-endian encoding; zero encodes as no bytes.
    pub(crate) fn to_be_bytes(&self) -> Vec<u8> {
        self.limbs.iter().rev().copied().collect()
    }
}

/// Drops high zero limbs.
fn trim(limbs: &mut Vec<u8>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}
