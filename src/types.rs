use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Sub};

/// 1-indexed bin identifier, always in `[1, bin_count]`.
pub type BinId = u32;

/// Item weight usable by the engine.
///
/// Only a total order (over the values actually used), addition and subtraction are
/// needed to score a candidate. `Default` must be the additive zero. `to_f64` is used
/// for reporting averages only, never for the search itself.
///
/// `checked_add` guards the problem's total weight; since weights are non-negative, no
/// bin total can exceed it, so scoring itself uses plain `+`.
pub trait Weight:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    fn to_f64(self) -> f64;

    /// `None` when the sum does not fit the type (or, for floats, is not finite).
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_integer_weight!(u32, u64, i32, i64, usize);
impl_float_weight!(f32, f64);

/// What happens to a newcomer whose fitness equals the population's worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReplacementPolicy {
    /// Accept when `new <= worst`; ties let the newcomer in.
    #[default]
    AcceptOnTie,
    /// Accept only when `new < worst`.
    StrictImprovement,
}

impl ReplacementPolicy {
    pub fn accepts<W: Weight>(self, new: W, worst: W) -> bool {
        match self {
            ReplacementPolicy::AcceptOnTie => new <= worst,
            ReplacementPolicy::StrictImprovement => new < worst,
        }
    }
}

/// When offspring are passed through mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MutationGate {
    /// Mutate only when the mutation rate is positive.
    #[default]
    WhenPositive,
    /// Always call mutate, which re-evaluates even when the rate is zero.
    Always,
}

impl MutationGate {
    pub fn should_mutate(self, mutation_rate: usize) -> bool {
        match self {
            MutationGate::WhenPositive => mutation_rate > 0,
            MutationGate::Always => true,
        }
    }
}
