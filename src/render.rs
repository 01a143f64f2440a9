use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::objects::{CreepSvg, MineralSvg, ResourceSvg, SourceSvg};
use crate::snapshot::ObjectSnapshot;
use crate::structures::{
    ContainerSvg, ControllerSvg, ExtensionSvg, ExtractorSvg, KeeperLairSvg, LabSvg, LinkSvg, NukerSvg,
    ObserverSvg, PowerBankSvg, PowerSpawnSvg, SpawnSvg, StorageSvg, TerminalSvg, TowerSvg,
};

/// Renders any snapshot with the renderer for its kind.
///
/// Extractors are drawn without the mineral beneath them; use
/// [ExtractorSvg::with_mineral] for that.
///
/// # Example
/// ```rust
/// use screeps_svg::common::RenderOptions;
/// use screeps_svg::render::render_object;
/// use screeps_svg::snapshot::ObjectSnapshot;
///
/// let source: ObjectSnapshot =
///     serde_json::from_str(r#"{"kind": "source", "energy": 1500, "energyCapacity": 3000}"#).unwrap();
/// let markup = render_object(&source, &RenderOptions::default()).unwrap();
/// assert!(markup.starts_with("<svg"));
/// ```
pub fn render_object(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<String, SvgError> {
    let markup = match snapshot {
        ObjectSnapshot::Creep(_) => CreepSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Source(_) => SourceSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Mineral(_) => MineralSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Resource(_) => ResourceSvg::from_snapshot(snapshot, options)?.render(),
        ObjectSnapshot::Spawn(_) => SpawnSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Extension(_) => ExtensionSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Tower(_) => TowerSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Storage(_) => StorageSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Terminal(_) => TerminalSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Container(_) => ContainerSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Lab(_) => LabSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Link(_) => LinkSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Nuker(_) => NukerSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Controller(_) => ControllerSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Extractor(_) => ExtractorSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Observer(_) => ObserverSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::PowerBank(_) => PowerBankSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::PowerSpawn(_) => PowerSpawnSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::KeeperLair => KeeperLairSvg::new(snapshot, options)?.render(),
        ObjectSnapshot::Other { .. } => return Err(SvgError::Unsupported(snapshot.kind())),
    };

    Ok(markup)
}
