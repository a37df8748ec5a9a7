//! The keyless 512-bit mixing permutation.
//!
//! The state is split into two halves `x` and `y` of eight 32-bit lanes each.
//! Lanes never interact inside the permutation; cross-lane diffusion comes
//! from the feed-forward in the duplex update.

/// Lane-indexed constants XORed into `x` at the end of every round.
const ROUND_CONSTANTS: [u32; 8] = [
    0xb7e15162, 0xbf715880, 0x38b4da56, 0x324e7738, 0xbb1185eb, 0x4f7c7b57, 0xcfbfa1c8, 0xc2b3293d,
];

/// Per-round rotation amounts `(r1, r2)`.
const ROTATIONS: [(u32, u32); 4] = [(31, 24), (17, 17), (0, 31), (24, 16)];

/// Half of the state: eight 32-bit lanes.
pub(crate) type Half = [u32; 8];

/// One round: `x += y >>> r1`, `y += x >>> r2`, `x ^= RC`, lane by lane.
#[inline(always)]
fn round(x: &mut Half, y: &mut Half, r1: u32, r2: u32) {
    for i in 0..8 {
        x[i] = x[i].wrapping_add(y[i].rotate_right(r1));
    }
    for i in 0..8 {
        y[i] = y[i].wrapping_add(x[i].rotate_right(r2));
    }
    for i in 0..8 {
        x[i] ^= ROUND_CONSTANTS[i];
    }
}

/// Apply the four-round permutation to the state halves in place.
#[inline]
pub(crate) fn permute(x: &mut Half, y: &mut Half) {
    for &(r1, r2) in ROTATIONS.iter() {
        round(x, y, r1, r2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{X0, Y0};

    #[test]
    fn test_permute_initial_constants() {
        let mut x = X0;
        let mut y = Y0;
        permute(&mut x, &mut y);

        assert_ne!((x, y), (X0, Y0), "permutation must not fix the IV");

        let mut bytes = [0u8; 64];
        for (i, w) in x.iter().chain(y.iter()).enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&w.to_le_bytes());
        }
        let expected = hex::decode(
            "560e1337c1f380d3dc163d4186e9f3715271734bb529a47e79afd92f81497773\
             4855dac2181553ca67009cd548afdb19c08f600c9fe09f573fbc37537838d3b5",
        )
        .unwrap();
        assert_eq!(&bytes[..], &expected[..]);
    }

    #[test]
    fn test_lanes_are_independent() {
        let mut x1 = [0u32; 8];
        let mut y1 = [0u32; 8];
        let mut x2 = [0u32; 8];
        let mut y2 = [0u32; 8];
        y2[3] = 0xdead_beef;

        permute(&mut x1, &mut y1);
        permute(&mut x2, &mut y2);

        for i in (0..8).filter(|&i| i != 3) {
            assert_eq!(x1[i], x2[i]);
            assert_eq!(y1[i], y2[i]);
        }
        assert_ne!((x1[3], y1[3]), (x2[3], y2[3]));
    }

    #[test]
    fn test_third_round_has_plain_add() {
        // With r1 = 0 the first step is a plain wrapping add.
        let mut x = [u32::MAX; 8];
        let mut y = [1u32; 8];
        round(&mut x, &mut y, 0, 31);
        for i in 0..8 {
            assert_eq!(x[i], ROUND_CONSTANTS[i]);
            assert_eq!(y[i], 1);
        }
    }
}
