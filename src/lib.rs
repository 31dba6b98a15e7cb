//! A deterministic nested-loop kernel with a three-way parity branch.
//!
//! All arithmetic is fixed-width `i32` with two's complement wraparound, the same as the 32-bit
//! `int` arithmetic the fixture is compared against. [`checked_complicated_function`] reports
//! overflow instead of wrapping.
//!
//! Built as a `cdylib` as well, so a wasm build exports [`run`] under its plain name.

/// First argument passed by [`run`].
pub const RUN_A: i32 = 7;
/// Second argument passed by [`run`].
pub const RUN_B: i32 = 4;

/// Which update rule applies to one `(i, j)` iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// `result += (i*i) / (j*j)`
    EvenEven,
    /// `result -= (i*i) * (j*j)`
    OddOdd,
    /// `result += i*j`
    Mixed,
}

impl Step {
    /// Pick the rule from the parities of `i` and `j`.
    pub fn classify(i: i32, j: i32) -> Step {
        match (i % 2 == 0, j % 2 == 0) {
            (true, true) => Step::EvenEven,
            (false, false) => Step::OddOdd,
            _ => Step::Mixed,
        }
    }
}

/// Accumulate over `1..=a` x `1..=b`, picking the update rule by the parities of `i` and `j`.
///
/// Returns 0 when either bound is below 1.
///
/// # Panics
///
/// Panics if `j*j` wraps to zero, which needs `j` to be a multiple of 65536 while `i` is even.
pub fn complicated_function(a: i32, b: i32) -> i32 {
    let mut result: i32 = 0;
    if a < 1 || b < 1 {
        return result;
    }
    for i in 1..=a {
        let ii = i.wrapping_mul(i);
        for j in 1..=b {
            let jj = j.wrapping_mul(j);
            result = match Step::classify(i, j) {
                Step::EvenEven => result.wrapping_add(ii.wrapping_div(jj)),
                Step::OddOdd => result.wrapping_sub(ii.wrapping_mul(jj)),
                Step::Mixed => result.wrapping_add(i.wrapping_mul(j)),
            };
        }
    }
    result
}

/// Same as [`complicated_function`], but returns `None` on the first step that would overflow
/// `i32` or divide by zero.
pub fn checked_complicated_function(a: i32, b: i32) -> Option<i32> {
    let mut result: i32 = 0;
    if a < 1 || b < 1 {
        return Some(result);
    }
    for i in 1..=a {
        // Checked even when every `j` is `Mixed`; the first overflow is at odd `i = 46341`,
        // which `j = 1` uses.
        let ii = i.checked_mul(i)?;
        for j in 1..=b {
            let jj = j.checked_mul(j)?;
            result = match Step::classify(i, j) {
                Step::EvenEven => result.checked_add(ii.checked_div(jj)?)?,
                Step::OddOdd => result.checked_sub(ii.checked_mul(jj)?)?,
                Step::Mixed => result.checked_add(i.checked_mul(j)?)?,
            };
        }
    }
    Some(result)
}

/// The kernel at `(RUN_A, RUN_B)`, exported unmangled as `run`.
#[no_mangle]
pub extern "C" fn run() -> i32 {
    complicated_function(RUN_A, RUN_B)
}


#[cfg(crux)]
mod crux_test {
    use super::*;
    extern crate crucible;
    use self::crucible::*;

    #[crux::test]
    fn run_golden() -> i32 {
        let r = run();
        crucible_assert!(r == -679);
        r
    }

    #[crux::test]
    fn checked_agrees() {
        let a = i32::symbolic("a");
        let b = i32::symbolic("b");
        crucible_assume!(0 <= a && a <= 4);
        crucible_assume!(0 <= b && b <= 4);
        crucible_assert!(checked_complicated_function(a, b) == Some(complicated_function(a, b)));
    }
}
