use thiserror::Error;

/// Everything that can go wrong while building a distribution.
///
/// All of these are detected when the distribution is constructed (directly
/// or through [from_spec](crate::spec::from_spec)). Sampling a successfully
/// constructed distribution never fails.
#[derive(Error, Debug)]
pub enum DistributionError {
    /// The specification was neither a number nor a mapping.
    #[error("invalid distribution specification: {spec}")]
    InvalidSpecification { spec: String },

    /// The `type` tag is absent or is not one of the supported families.
    #[error("unknown distribution type: {tag}")]
    UnknownType { tag: String },

    /// A required parameter was not present in the mapping.
    #[error("missing parameter `{parameter}` for {distribution} distribution")]
    MissingParameter {
        distribution: &'static str,
        parameter: &'static str,
    },

    /// A parameter was present but has the wrong shape or violates the
    /// constraints of the family (negative scale, `low > high`, probabilities
    /// that do not add up to 1, ...).
    #[error("invalid parameter `{parameter}` for {distribution} distribution: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        parameter: &'static str,
        reason: String,
    },

    /// One entry of a collection of named specifications failed.
    #[error("specification `{name}`: {source}")]
    Named {
        name: String,
        #[source]
        source: Box<DistributionError>,
    },

    /// The specification document is not valid JSON.
    #[error("could not parse specification document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [DistributionError].
///
/// Useful to compare errors, since the error itself carries messages and
/// sources that are not comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSpecification,
    UnknownType,
    MissingParameter,
    InvalidParameter,
}

impl DistributionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        return match self {
            DistributionError::InvalidSpecification { .. } | DistributionError::Json(_) => {
                ErrorKind::InvalidSpecification
            }
            DistributionError::UnknownType { .. } => ErrorKind::UnknownType,
            DistributionError::MissingParameter { .. } => ErrorKind::MissingParameter,
            DistributionError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            DistributionError::Named { source, .. } => source.kind(),
        };
    }

    pub(crate) fn invalid(
        distribution: &'static str,
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> DistributionError {
        return DistributionError::InvalidParameter {
            distribution,
            parameter,
            reason: reason.into(),
        };
    }
}
