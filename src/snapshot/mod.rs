use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use screeps::constants::{Part, StructureType};
use screeps::RoomName;

use crate::common::SvgError;

/// Implementation of the Store structure.
pub mod store;

pub use store::Store;

/// The kind of game object a snapshot was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Creep,
    Source,
    Mineral,
    /// A resource pile dropped on the ground.
    Resource,
    Structure(StructureType),
}

impl ObjectKind {
    pub const SPAWN: Self = ObjectKind::Structure(StructureType::Spawn);
    pub const EXTENSION: Self = ObjectKind::Structure(StructureType::Extension);
    pub const TOWER: Self = ObjectKind::Structure(StructureType::Tower);
    pub const STORAGE: Self = ObjectKind::Structure(StructureType::Storage);
    pub const TERMINAL: Self = ObjectKind::Structure(StructureType::Terminal);
    pub const CONTAINER: Self = ObjectKind::Structure(StructureType::Container);
    pub const LAB: Self = ObjectKind::Structure(StructureType::Lab);
    pub const LINK: Self = ObjectKind::Structure(StructureType::Link);
    pub const NUKER: Self = ObjectKind::Structure(StructureType::Nuker);
    pub const CONTROLLER: Self = ObjectKind::Structure(StructureType::Controller);
    pub const EXTRACTOR: Self = ObjectKind::Structure(StructureType::Extractor);
    pub const OBSERVER: Self = ObjectKind::Structure(StructureType::Observer);
    pub const POWER_BANK: Self = ObjectKind::Structure(StructureType::PowerBank);
    pub const POWER_SPAWN: Self = ObjectKind::Structure(StructureType::PowerSpawn);
    pub const KEEPER_LAIR: Self = ObjectKind::Structure(StructureType::KeeperLair);
}

fn structure_name(structure_type: StructureType) -> &'static str {
    match structure_type {
        StructureType::Spawn => "spawn",
        StructureType::Extension => "extension",
        StructureType::Road => "road",
        StructureType::Wall => "constructedWall",
        StructureType::Rampart => "rampart",
        StructureType::KeeperLair => "keeperLair",
        StructureType::Portal => "portal",
        StructureType::Controller => "controller",
        StructureType::Link => "link",
        StructureType::Storage => "storage",
        StructureType::Tower => "tower",
        StructureType::Observer => "observer",
        StructureType::PowerBank => "powerBank",
        StructureType::PowerSpawn => "powerSpawn",
        StructureType::Extractor => "extractor",
        StructureType::Lab => "lab",
        StructureType::Terminal => "terminal",
        StructureType::Container => "container",
        StructureType::Nuker => "nuker",
        StructureType::Factory => "factory",
        StructureType::InvaderCore => "invaderCore",
        _ => "structure",
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Creep => "creep",
            ObjectKind::Source => "source",
            ObjectKind::Mineral => "mineral",
            ObjectKind::Resource => "resource",
            ObjectKind::Structure(structure_type) => structure_name(*structure_type),
        };
        f.write_str(name)
    }
}

/// A read-only copy of the fields the renderers read off a game object.
///
/// # Example
/// ```rust
/// use screeps_svg::snapshot::{ObjectKind, ObjectSnapshot};
///
/// let snapshot: ObjectSnapshot = serde_json::from_str(
///     r#"{"kind": "tower", "owner": "Spedwards", "energy": 500, "energyCapacity": 1000}"#,
/// ).unwrap();
/// assert_eq!(snapshot.kind(), ObjectKind::TOWER);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ObjectSnapshot {
    Creep(CreepSnapshot),
    Source(SourceSnapshot),
    Mineral(MineralSnapshot),
    Resource(ResourceSnapshot),
    Spawn(SpawnSnapshot),
    Extension(ExtensionSnapshot),
    Tower(TowerSnapshot),
    Storage(StoreSnapshot),
    Terminal(StoreSnapshot),
    Container(StoreSnapshot),
    Lab(LabSnapshot),
    Link(LinkSnapshot),
    Nuker(NukerSnapshot),
    Controller(ControllerSnapshot),
    Extractor(OwnedSnapshot),
    Observer(OwnedSnapshot),
    PowerBank(PowerBankSnapshot),
    PowerSpawn(PowerSpawnSnapshot),
    KeeperLair,
    /// Any structure without a renderer of its own.
    #[serde(rename = "structure", rename_all = "camelCase")]
    Other { structure_type: StructureType },
}

impl ObjectSnapshot {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectSnapshot::Creep(_) => ObjectKind::Creep,
            ObjectSnapshot::Source(_) => ObjectKind::Source,
            ObjectSnapshot::Mineral(_) => ObjectKind::Mineral,
            ObjectSnapshot::Resource(_) => ObjectKind::Resource,
            ObjectSnapshot::Spawn(_) => ObjectKind::SPAWN,
            ObjectSnapshot::Extension(_) => ObjectKind::EXTENSION,
            ObjectSnapshot::Tower(_) => ObjectKind::TOWER,
            ObjectSnapshot::Storage(_) => ObjectKind::STORAGE,
            ObjectSnapshot::Terminal(_) => ObjectKind::TERMINAL,
            ObjectSnapshot::Container(_) => ObjectKind::CONTAINER,
            ObjectSnapshot::Lab(_) => ObjectKind::LAB,
            ObjectSnapshot::Link(_) => ObjectKind::LINK,
            ObjectSnapshot::Nuker(_) => ObjectKind::NUKER,
            ObjectSnapshot::Controller(_) => ObjectKind::CONTROLLER,
            ObjectSnapshot::Extractor(_) => ObjectKind::EXTRACTOR,
            ObjectSnapshot::Observer(_) => ObjectKind::OBSERVER,
            ObjectSnapshot::PowerBank(_) => ObjectKind::POWER_BANK,
            ObjectSnapshot::PowerSpawn(_) => ObjectKind::POWER_SPAWN,
            ObjectSnapshot::KeeperLair => ObjectKind::KEEPER_LAIR,
            ObjectSnapshot::Other { structure_type } => ObjectKind::Structure(*structure_type),
        }
    }

    /// Builds the error returned when this snapshot is handed to the wrong renderer.
    pub(crate) fn wrong_kind(&self, expected: ObjectKind) -> SvgError {
        let found = self.kind();
        debug!("rejected {} snapshot, expected {}", found, expected);
        SvgError::InvalidInputKind { expected, found }
    }
}

/// Builds the error returned when a required field is unusable.
pub(crate) fn missing_field(kind: ObjectKind, field: &'static str) -> SvgError {
    debug!("rejected {} snapshot, unusable `{}`", kind, field);
    SvgError::MissingField { kind, field }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreepSnapshot {
    #[serde(default)]
    pub name: String,
    pub body: Vec<Part>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSnapshot {
    pub energy: u32,
    pub energy_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineralSnapshot {
    /// Base mineral symbol, one of `H O U L K Z X`.
    pub mineral_type: String,
    #[serde(default)]
    pub mineral_amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnapshot {
    pub resource_type: String,
    pub amount: u32,
}

/// A spawn's in-progress creep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spawning {
    pub need_time: u32,
    pub remaining_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub energy: u32,
    pub energy_capacity: u32,
    #[serde(default)]
    pub spawning: Option<Spawning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub energy: u32,
    pub energy_capacity: u32,
    /// Controller level of the room the extension stands in.
    pub room_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub energy: u32,
    pub energy_capacity: u32,
}

/// Shared by storages, terminals and containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub store: Store,
    pub store_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub energy: u32,
    pub energy_capacity: u32,
    #[serde(default)]
    pub mineral_type: Option<String>,
    #[serde(default)]
    pub mineral_amount: u32,
    pub mineral_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub energy: u32,
    pub energy_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NukerSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub energy: u32,
    pub energy_capacity: u32,
    pub ghodium: u32,
    pub ghodium_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub level: u8,
    #[serde(default)]
    pub progress: u32,
    /// Absent at level 8, where there's nothing left to upgrade to.
    #[serde(default)]
    pub progress_total: Option<u32>,
    #[serde(default)]
    pub ticks_to_downgrade: u32,
    /// Username of the reserving player.
    #[serde(default)]
    pub reservation: Option<String>,
    #[serde(default)]
    pub upgrade_blocked: bool,
    #[serde(default)]
    pub safe_mode: bool,
}

/// Structures where only ownership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerBankSnapshot {
    pub power: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSpawnSnapshot {
    #[serde(default)]
    pub owner: Option<String>,
    pub energy: u32,
    pub energy_capacity: u32,
    pub power: u32,
    pub power_capacity: u32,
}

/// The structures a room composite draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub name: RoomName,
    #[serde(default)]
    pub storage: Option<ObjectSnapshot>,
    #[serde(default)]
    pub terminal: Option<ObjectSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_uses_game_constant_names() {
        assert_eq!(ObjectKind::Creep.to_string(), "creep");
        assert_eq!(ObjectKind::POWER_SPAWN.to_string(), "powerSpawn");
        assert_eq!(ObjectKind::Structure(StructureType::Wall).to_string(), "constructedWall");
    }

    #[test]
    fn wrong_kind_reports_both_kinds() {
        let snapshot = ObjectSnapshot::KeeperLair;
        assert_eq!(
            snapshot.wrong_kind(ObjectKind::TOWER),
            SvgError::InvalidInputKind {
                expected: ObjectKind::TOWER,
                found: ObjectKind::KEEPER_LAIR,
            }
        );
    }

    #[test]
    fn deserializes_creep_body() {
        let snapshot: ObjectSnapshot =
            serde_json::from_str(r#"{"kind": "creep", "name": "harvester", "body": ["work", "carry", "move"]}"#).unwrap();
        match snapshot {
            ObjectSnapshot::Creep(creep) => {
                assert_eq!(creep.name, "harvester");
                assert_eq!(creep.body, vec![Part::Work, Part::Carry, Part::Move]);
            }
            other => panic!("unexpected snapshot {other:?}"),
        }
    }

    #[test]
    fn deserializes_store_snapshot() {
        let snapshot: ObjectSnapshot = serde_json::from_str(
            r#"{"kind": "storage", "owner": "Helam", "store": {"energy": 5000, "U": 20}, "storeCapacity": 1000000}"#,
        )
        .unwrap();
        assert_eq!(snapshot.kind(), ObjectKind::STORAGE);
        let ObjectSnapshot::Storage(storage) = snapshot else {
            panic!("not a storage");
        };
        assert_eq!(storage.store.get("U"), 20);
        assert_eq!(storage.owner.as_deref(), Some("Helam"));
    }

    #[test]
    fn deserializes_other_structures() {
        let snapshot: ObjectSnapshot = serde_json::from_str(r#"{"kind": "structure", "structureType": "road"}"#).unwrap();
        assert_eq!(snapshot.kind(), ObjectKind::Structure(StructureType::Road));
    }

    #[test]
    fn deserializes_room() {
        let room: RoomSnapshot = serde_json::from_str(r#"{"name": "E5N6"}"#).unwrap();
        assert_eq!(room.name, "E5N6".parse::<RoomName>().unwrap());
        assert!(room.storage.is_none());
    }
}
