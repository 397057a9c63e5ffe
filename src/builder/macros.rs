//! Macros for declaring machine states.

/// Declare a fieldless state enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`
/// and serde's traits, carries an `ALL` array of its variants in declaration
/// order, and displays as the variant name.
///
/// # Example
///
/// ```
/// use gumball::core::State;
/// use gumball::state_enum;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///         Removed,
///     }
///     final: [Removed]
/// }
///
/// assert_eq!(Turnstile::ALL.len(), 3);
/// assert_eq!(Turnstile::Unlocked.to_string(), "Unlocked");
/// assert!(Turnstile::Removed.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Valve {
            Closed,
            Open,
            Seized,
        }
        final: [Seized]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Valve::Closed.name(), "Closed");
        assert!(!Valve::Open.is_final());
        assert!(Valve::Seized.is_final());
    }

    #[test]
    fn state_enum_lists_all_variants_in_order() {
        assert_eq!(Valve::ALL, &[Valve::Closed, Valve::Open, Valve::Seized]);
    }

    #[test]
    fn state_enum_displays_variant_name() {
        assert_eq!(format!("{}", Valve::Open), "Open");
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            pub enum Toggle {
                Up,
                Down,
            }
        }

        assert!(Toggle::ALL.iter().all(|s| !s.is_final()));
    }
}
