use std::fmt;

/// Bitwise comparison of float components, so `-0.0 != 0.0` and NaN equals
/// a NaN with the same payload.
#[derive(Debug, Clone, Default)]
pub struct ComponentCmp;

pub trait Bits: Copy + fmt::Debug {
    fn bits(self) -> u64;
}

macro_rules! impl_float_bits {
    ( $( $float:ty )+ ) => {
        $(
            impl Bits for $float {
                fn bits(self) -> u64 {
                    self.to_bits() as u64
                }
            }
        )+
    };
}

impl_float_bits! { f32 f64 }

impl ComponentCmp {
    pub const DEFAULT: Self = Self;

    pub fn eq<T: Bits>(&self, is: &[T], should: &[T]) {
        assert_eq!(
            is.len(),
            should.len(),
            "is: {:?} should: {:?} (length)",
            is,
            should
        );

        for (idx, (v1, v2)) in is.iter().zip(should.iter()).enumerate() {
            assert!(
                v1.bits() == v2.bits(),
                "is: {:?} should: {:?} @ {}",
                is,
                should,
                idx
            );
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
