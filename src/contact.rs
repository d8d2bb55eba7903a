//! Contacts and the small, fixed-capacity result type pairwise collision
//! functions build up and return.
//!
//! The `ContactResult` enum mirrors the teacher engine's `shape_shape.rs`, which
//! represents "zero, one, or two contacts" as `ContactResult { Zero, One(Contact),
//! Two(Contact, Contact) }` rather than a heap-allocated `Vec`, since the cap is a
//! compile-time constant and every call site already knows it.

use crate::math::{Unit, Vec2};

/// Maximum number of contacts any pairwise collision test may report.
pub const MAX_CONTACTS_PER_PAIR: usize = 2;

/// Stable identifier for a contact, built by combining shape/vertex identities
/// through [`hash_pair`]. Used by a surrounding solver's contact-persistence
/// (warm-starting) cache; this crate only produces it, never interprets it.
pub type ContactId = u64;

/// Commutative combination of two small integers into a [`ContactId`].
///
/// Commutative so that a contact identified by features `(x, y)` hashes the same
/// regardless of which order the two features were visited in.
#[inline]
pub fn hash_pair(a: u32, b: u32) -> ContactId {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    ((lo as u64) << 32) | hi as u64
}

/// One point of interpenetration between two shapes.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// World-space point of application.
    pub point: Vec2,
    /// Unit normal, pointing from the first shape toward the second.
    pub normal: Unit,
    /// Signed penetration distance; negative means overlap, zero means touching.
    pub distance: f64,
    /// Stable identifier for contact persistence, or 0 if the pair has none
    /// (plain circle/circle contacts are not persisted-identified upstream).
    pub id: ContactId,
}

impl Contact {
    pub fn new(point: Vec2, normal: Unit, distance: f64, id: ContactId) -> Contact {
        Contact {
            point,
            normal,
            distance,
            id,
        }
    }

    /// Return this contact with its normal negated and the point left in place,
    /// for re-orienting a contact computed as "first toward second" into "second
    /// toward first" when canonical-order normalization swapped the arguments.
    pub fn flipped(self) -> Contact {
        Contact {
            normal: -self.normal,
            ..self
        }
    }
}

/// Zero, one, or two contacts — the only cardinalities any pairwise test emits.
#[derive(Clone, Copy, Debug)]
pub enum ContactResult {
    Zero,
    One(Contact),
    Two(Contact, Contact),
}

impl ContactResult {
    /// Append a contact, saturating at [`MAX_CONTACTS_PER_PAIR`] rather than
    /// overflowing — a third push onto `Two` is silently dropped.
    pub fn push(self, c: Contact) -> ContactResult {
        match self {
            ContactResult::Zero => ContactResult::One(c),
            ContactResult::One(a) => ContactResult::Two(a, c),
            full @ ContactResult::Two(..) => full,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            ContactResult::Zero => 0,
            ContactResult::One(_) => 1,
            ContactResult::Two(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        let (a, b) = match self {
            ContactResult::Zero => (None, None),
            ContactResult::One(a) => (Some(a), None),
            ContactResult::Two(a, b) => (Some(a), Some(b)),
        };
        a.into_iter().chain(b)
    }

    /// Negate every contact's normal, for re-orienting a whole result after a
    /// canonical-order swap.
    pub fn flipped(self) -> ContactResult {
        match self {
            ContactResult::Zero => ContactResult::Zero,
            ContactResult::One(a) => ContactResult::One(a.flipped()),
            ContactResult::Two(a, b) => ContactResult::Two(a.flipped(), b.flipped()),
        }
    }

    /// Write this result's contacts into the prefix of `out` and return the count
    /// written. `out` must have capacity >= [`MAX_CONTACTS_PER_PAIR`].
    pub fn write_to(&self, out: &mut [Contact]) -> usize {
        debug_assert!(out.len() >= MAX_CONTACTS_PER_PAIR, "output buffer too small");
        let mut n = 0;
        for c in self.iter() {
            out[n] = *c;
            n += 1;
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_pair_is_commutative() {
        assert_eq!(hash_pair(3, 7), hash_pair(7, 3));
        assert_ne!(hash_pair(3, 7), hash_pair(3, 8));
    }

    #[test]
    fn push_saturates_at_two() {
        let c = Contact::new(Vec2::new(0.0, 0.0), Unit::unit_x(), 0.0, 0);
        let r = ContactResult::Zero.push(c).push(c).push(c);
        assert_eq!(r.count(), 2);
    }

    #[test]
    fn write_to_copies_prefix() {
        let c1 = Contact::new(Vec2::new(1.0, 0.0), Unit::unit_x(), -0.5, 1);
        let c2 = Contact::new(Vec2::new(2.0, 0.0), Unit::unit_x(), -0.25, 2);
        let r = ContactResult::Two(c1, c2);
        let mut out = [Contact::new(Vec2::new(0.0, 0.0), Unit::unit_x(), 0.0, 0); MAX_CONTACTS_PER_PAIR];
        let n = r.write_to(&mut out);
        assert_eq!(n, 2);
        assert_eq!(out[0].id, 1);
        assert_eq!(out[1].id, 2);
    }
}
