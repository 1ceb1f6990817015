use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Error {
    /// `index` is not below `width`.
    InvalidIndex { index: u32, width: u32 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidIndex { index, width } => {
                write!(f, "bit index {index} out of range for {width}-bit word")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    #[test]
    fn display() {
        let err = Error::InvalidIndex { index: 8, width: 8 };
        assert_eq!(err.to_string(), "bit index 8 out of range for 8-bit word");
    }

    #[test]
    fn serialized_shape() {
        let err = Error::InvalidIndex {
            index: 70,
            width: 64,
        };
        assert_json_snapshot!(err, @r###"
        {
          "invalid_index": {
            "index": 70,
            "width": 64
          }
        }
        "###);
    }
}
