/// Declares a fieldless token enum with `as_str`, `Display` and `FromStr`.
///
/// Each variant lists its class-token text first, then any extra spellings
/// accepted by `FromStr`.
macro_rules! token_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $token:literal $(| $alias:literal)*
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $name {
			/// Token text used in class names.
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $token,)+
				}
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::error::UnknownToken;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s.trim() {
					$($token $(| $alias)* => Ok(Self::$variant),)+
					other => Err($crate::error::UnknownToken::new(stringify!($name), other)),
				}
			}
		}
	};
}
