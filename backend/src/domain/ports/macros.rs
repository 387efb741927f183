//! `define_port_error!` declares a port's failure enum.
//!
//! Every variant carries a single adapter-supplied `message` and renders as
//! `"<summary>: <message>"`. The macro also emits a snake_case constructor per
//! variant and a [`message`](#method.message) accessor so services can log the
//! detail without matching on each variant.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $summary:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{summary}: {message}", summary = $summary)]
                $variant {
                    /// Adapter detail; logged, never shown to clients.
                    message: String,
                },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a `", stringify!($variant), "` failure.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+

            /// Adapter detail carried by any variant.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } => message, )+
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Generated constructors and rendering.

    use rstest::rstest;

    define_port_error! {
        pub enum SamplePortError {
            Unreachable => "store unreachable",
            RowRejected => "row rejected",
        }
    }

    #[rstest]
    fn constructors_accept_borrowed_and_owned_messages() {
        assert_eq!(
            SamplePortError::unreachable("refused"),
            SamplePortError::Unreachable {
                message: "refused".to_owned()
            }
        );
        assert_eq!(
            SamplePortError::row_rejected(String::from("check failed")).message(),
            "check failed"
        );
    }

    #[rstest]
    #[case(SamplePortError::unreachable("timeout"), "store unreachable: timeout")]
    #[case(SamplePortError::row_rejected("name_present"), "row rejected: name_present")]
    fn display_prefixes_summary(#[case] err: SamplePortError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
