//! Macros to declare the closed keyword enums used throughout the crate.

/// Declare a closed set of keywords.
///
/// Every variant carries a keyword used in configuration and on the command
/// line, a short english description, and a japanese title.
macro_rules! keywords {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $({$variant:ident, $keyword:literal, $describe:literal, $title:literal $(,)?}),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(::serde::Serialize, ::serde::Deserialize, ::fixed_map::Key)]
        #[key(bitset)]
        $vis enum $name {
            $(
                #[doc = $title]
                #[serde(rename = $keyword)]
                $variant,
            )*
        }

        impl $name {
            /// All values in declaration order.
            $vis const ALL: &'static [$name] = &[
                $($name::$variant,)*
            ];

            /// Keyword used in configuration and arguments.
            $vis fn keyword(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)*
                }
            }

            /// Short english description.
            $vis fn describe(&self) -> &'static str {
                match self {
                    $($name::$variant => $describe,)*
                }
            }

            /// Japanese grammatical title.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            /// Parse a keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($keyword => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// Parse the english description produced by `describe`.
            $vis fn parse_describe(string: &str) -> Option<$name> {
                match string {
                    $($describe => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// Parse the japanese title produced by `title`.
            $vis fn parse_title(string: &str) -> Option<$name> {
                match string {
                    $($title => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl ::core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.describe())
            }
        }
    };
}
