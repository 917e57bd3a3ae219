use serde::Serialize;

/// One 3D asset available to the viewer client.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    /// Unique, caller-visible identifier.
    pub id: u32,
    /// Display label shown on the item card.
    pub name: &'static str,
    /// URL of the `.glb` binary, rooted under the static mount.
    pub path: &'static str,
    /// Client-side multiplier normalizing the asset's unit system.
    /// Millimeter-authored assets use 0.01, meter-authored 1.0.
    pub scale: f64,
    /// Decorative glyph for the item card.
    pub icon: &'static str,
}

static CATALOG: [ModelDescriptor; 2] = [
    ModelDescriptor {
        id: 1,
        name: "Velvet Chair",
        path: "/static/models/gaming_chair.glb",
        scale: 0.5,
        icon: "🪑",
    },
    ModelDescriptor {
        id: 2,
        name: "Coffee Table",
        path: "/static/models/study_table.glb",
        scale: 0.01,
        icon: "🛋️",
    },
];

/// All models, in insertion order. Insertion order is the only ordering
/// guarantee offered to clients. The slice is never mutated after process
/// start, so unsynchronized concurrent reads are safe.
pub fn models() -> &'static [ModelDescriptor] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = models().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), models().len());
    }

    #[test]
    fn scales_are_positive() {
        for model in models() {
            assert!(model.scale > 0.0, "model {} has non-positive scale", model.id);
        }
    }

    #[test]
    fn paths_are_rooted_under_static_mount() {
        for model in models() {
            assert!(
                model.path.starts_with("/static/models/"),
                "model {} path '{}' is outside the static mount",
                model.id,
                model.path
            );
        }
    }

    #[test]
    fn serializes_to_stable_json() {
        let json = serde_json::to_string(models()).unwrap();
        assert_eq!(
            json,
            "[{\"id\":1,\"name\":\"Velvet Chair\",\"path\":\"/static/models/gaming_chair.glb\",\"scale\":0.5,\"icon\":\"🪑\"},\
             {\"id\":2,\"name\":\"Coffee Table\",\"path\":\"/static/models/study_table.glb\",\"scale\":0.01,\"icon\":\"🛋️\"}]"
        );
        // Byte-stable across repeated serialization.
        assert_eq!(json, serde_json::to_string(models()).unwrap());
    }
}
