/// Defines a unit-variant enum wired into the [`Enumeration`](crate::Enumeration) contract.
///
/// # Parameters
///
/// - `Name`   : The name of the generated enum.
/// - Variants : A list of `Variant => value` mappings, where `value` is an int,
///   float, bool, or string literal carried as the member's value.
///
/// The member's name is the variant identifier, verbatim.
///
/// # Examples
///
/// ```rust
/// use enum_field::{EnumValue, Enumeration, enum_members};
///
/// enum_members!(Color {
/// 	Red   => 1,
/// 	Green => 2,
/// });
///
/// assert_eq!(Color::Red.name(), "Red");
/// assert_eq!(Color::Green.value(), EnumValue::Int(2));
/// assert_eq!(Color::MEMBERS, &[Color::Red, Color::Green]);
/// ```
///
/// String-valued members:
///
/// ```rust
/// use enum_field::{EnumValue, Enumeration, enum_members};
///
/// enum_members!(Suit {
/// 	Hearts => "H",
/// 	Spades => "S",
/// });
///
/// assert_eq!(Suit::Hearts.value(), EnumValue::Str("H".to_string()));
/// ```
#[macro_export]
macro_rules! enum_members {
	($name:ident { $($variant:ident => $value:expr,)* }) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		pub enum $name {
			$($variant,)*
		}

		impl $crate::Enumeration for $name {
			const MEMBERS: &'static [Self] = &[$(Self::$variant,)*];

			fn name(&self) -> &'static str {
				match self {
					$( Self::$variant => stringify!($variant), )*
				}
			}

			fn value(&self) -> $crate::EnumValue {
				match self {
					$( Self::$variant => $crate::EnumValue::from($value), )*
				}
			}
		}
	};
}

pub use enum_members;
