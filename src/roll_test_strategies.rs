use proptest::prelude::*;
use crate::{DicePool, DieSize};


pub(crate) fn die_size_strategy() -> impl Strategy<Value = DieSize> {
    (0..DieSize::ALL.len()).prop_map(|index| DieSize::ALL[index])
}

pub(crate) fn pool_strategy() -> impl Strategy<Value = DicePool> {
    (die_size_strategy(), 1..=40u16)
        .prop_map(|(die, count)| DicePool::new(die, count))
}
