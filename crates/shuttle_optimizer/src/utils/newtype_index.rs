/// Declares a `usize` newtype used to index into a slice of `$t`.
#[macro_export]
macro_rules! define_index_newtype {
    ($name:ident, $t:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Resolves the index against `items`, `None` when out of range.
            pub fn resolve<'a>(&self, items: &'a [$t]) -> Option<&'a $t> {
                items.get(self.0)
            }
        }
    };
}
