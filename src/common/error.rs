use thiserror::Error;

use crate::snapshot::ObjectKind;

/// Errors returned when a snapshot can't be turned into markup.
///
/// All variants describe invalid input; renderers never fail for any other reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SvgError {
    /// The snapshot describes a different kind of game object than the renderer draws.
    #[error("expected a {expected} snapshot, got a {found} snapshot")]
    InvalidInputKind {
        expected: ObjectKind,
        found: ObjectKind,
    },

    /// The snapshot is of the right kind, but a field the renderer needs is unusable.
    #[error("{kind} snapshot is missing a usable `{field}`")]
    MissingField {
        kind: ObjectKind,
        field: &'static str,
    },

    /// The resource symbol has no icon.
    #[error("unknown resource type `{0}`")]
    UnknownResource(String),

    /// No renderer draws this kind of object.
    #[error("no renderer for {0} snapshots")]
    Unsupported(ObjectKind),
}

impl SvgError {
    /// Every error variant is a flavour of invalid input; this is always true.
    ///
    /// Exists so callers matching on the failure family don't need to enumerate variants.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SvgError::InvalidInputKind { .. }
                | SvgError::MissingField { .. }
                | SvgError::UnknownResource(_)
                | SvgError::Unsupported(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screeps::constants::StructureType;

    #[test]
    fn invalid_kind_message_names_both_kinds() {
        let err = SvgError::InvalidInputKind {
            expected: ObjectKind::Structure(StructureType::Tower),
            found: ObjectKind::Creep,
        };
        assert_eq!(err.to_string(), "expected a tower snapshot, got a creep snapshot");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn missing_field_message_names_the_field() {
        let err = SvgError::MissingField {
            kind: ObjectKind::Structure(StructureType::Spawn),
            field: "needTime",
        };
        assert_eq!(err.to_string(), "spawn snapshot is missing a usable `needTime`");
    }

    #[test]
    fn unsupported_message_names_the_kind() {
        let err = SvgError::Unsupported(ObjectKind::Structure(StructureType::Road));
        assert_eq!(err.to_string(), "no renderer for road snapshots");
        assert!(err.is_invalid_input());
    }
}
