use crate::error::{PipelineError, Result};

/// Parse a record key into its numeric parameter.
///
/// Accepts composite labels such as `"experiment1_1000"`, where the parameter
/// is the last `_`-separated token, and bare numbers such as `"25"`.
pub fn extract_parameter(key: &str) -> Result<u64> {
    let token = key.rsplit('_').next().unwrap_or(key).trim();
    token.parse::<u64>().map_err(|_| PipelineError::MalformedKey {
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn composite_label() {
        assert_eq!(extract_parameter("experiment1_1000").unwrap(), 1000);
        assert_eq!(extract_parameter("a_b_c_42").unwrap(), 42);
    }

    #[test]
    fn bare_number() {
        assert_eq!(extract_parameter("25").unwrap(), 25);
        assert_eq!(extract_parameter(" 7 ").unwrap(), 7);
    }

    #[test]
    fn malformed_keys() {
        for key in ["", "experiment", "exp_", "exp_abc", "-5", "e_1.5"] {
            let err = extract_parameter(key).unwrap_err();
            assert!(
                matches!(err, PipelineError::MalformedKey { key: ref k } if k == key),
                "key {key:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn error_message_names_the_key() {
        let err = extract_parameter("bogus_key").unwrap_err();
        assert!(err.to_string().contains("\"bogus_key\""));
    }

    proptest! {
        #[test]
        fn label_then_number(label in "[a-z][a-z0-9_]{0,12}", n in any::<u64>()) {
            let key = format!("{label}_{n}");
            prop_assert_eq!(extract_parameter(&key).unwrap(), n);
        }

        #[test]
        fn bare_number_round_trips(n in any::<u64>()) {
            prop_assert_eq!(extract_parameter(&n.to_string()).unwrap(), n);
        }
    }
}
