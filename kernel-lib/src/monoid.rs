pub trait Monoid {
    fn empty() -> Self;
    fn append(&self, right: &Self) -> Self;
}

macro_rules! impl_additive_monoid {
    ($($t:ty),*) => {
        $(
            impl Monoid for $t {
                fn empty() -> Self {
                    0
                }

                fn append(&self, right: &Self) -> Self {
                    *self + *right
                }
            }
        )*
    };
}

impl_additive_monoid!(i32, i64, u32, u64, usize);
