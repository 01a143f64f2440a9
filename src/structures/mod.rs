//! Renderers for owned and neutral structures.

pub mod container;
pub mod controller;
pub mod extension;
pub mod extractor;
pub mod keeper_lair;
pub mod lab;
pub mod link;
pub mod nuker;
pub mod observer;
pub mod power_bank;
pub mod power_spawn;
pub mod spawn;
pub mod storage;
pub mod store_object;
pub mod terminal;
pub mod tower;

pub use container::ContainerSvg;
pub use controller::ControllerSvg;
pub use extension::ExtensionSvg;
pub use extractor::{ExtractorSvg, MineralInput};
pub use keeper_lair::KeeperLairSvg;
pub use lab::LabSvg;
pub use link::LinkSvg;
pub use nuker::NukerSvg;
pub use observer::ObserverSvg;
pub use power_bank::PowerBankSvg;
pub use power_spawn::PowerSpawnSvg;
pub use spawn::SpawnSvg;
pub use storage::StorageSvg;
pub use store_object::{StoreContents, StoreLevels};
pub use terminal::TerminalSvg;
pub use tower::TowerSvg;
