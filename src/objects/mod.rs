//! Renderers for creeps, room objects and resource icons.

pub mod creep;
pub mod mineral;
pub mod resource;
pub mod room;
pub mod source;

pub use creep::CreepSvg;
pub use mineral::MineralSvg;
pub use resource::ResourceSvg;
pub use room::RoomSvg;
pub use source::SourceSvg;
