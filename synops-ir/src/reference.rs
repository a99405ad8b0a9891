//! Symbolic references between entities.

use serde::{Deserialize, Serialize};

use crate::{EntityId, serde_helpers::RawEntityRef};

/// A symbolic link from a token to one or more declarations.
///
/// A reference names its targets by id and carries the text to display.
/// Several targets are allowed because a name may refer to an overload set
/// or to multiple redeclarations. References are never resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEntityRef", into = "RawEntityRef")]
pub struct EntityRef {
    targets: Vec<EntityId>,
    name: String,
}

impl EntityRef {
    /// Create a reference to a single target.
    pub fn new(target: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            targets: vec![target.into()],
            name: name.into(),
        }
    }

    /// Create a reference to several targets sharing one display name.
    pub fn overloaded(targets: Vec<EntityId>, name: impl Into<String>) -> Self {
        Self {
            targets,
            name: name.into(),
        }
    }

    /// Create a reference whose display name is the target's last path segment.
    pub fn to(target: impl Into<EntityId>) -> Self {
        let target = target.into();
        let name = target.unqualified().to_string();
        Self {
            targets: vec![target],
            name,
        }
    }

    /// The referenced entity ids.
    pub fn targets(&self) -> &[EntityId] {
        &self.targets
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (Vec<EntityId>, String) {
        (self.targets, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_uses_last_segment() {
        let r = EntityRef::to("geo::shapes::circle");
        assert_eq!(r.name(), "circle");
        assert_eq!(r.targets(), &[EntityId::new("geo::shapes::circle")]);
    }

    #[test]
    fn test_deserialize_single_target() {
        let r: EntityRef = toml::from_str(r#"ref = "std::string""#).unwrap();
        assert_eq!(r.name(), "string");
        assert_eq!(r.targets().len(), 1);
    }

    #[test]
    fn test_deserialize_overload_set() {
        let r: EntityRef = toml::from_str(
            r#"
            ref = ["math::abs(int)", "math::abs(double)"]
            name = "abs"
            "#,
        )
        .unwrap();
        assert_eq!(r.name(), "abs");
        assert_eq!(r.targets().len(), 2);
    }

    #[test]
    fn test_serialize_roundtrip_through_json() {
        let r = EntityRef::new("a::b", "b");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"ref":"a::b","name":"b"}"#);
        let back: EntityRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
