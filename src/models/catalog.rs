use std::path::PathBuf;

/// How a source sheet is interpreted once parsed.
///
/// The mode is assigned per file by the catalog, never inferred from the
/// file's content at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// A single index column followed by a single value column.
    Series,
    /// First column is the row index, every remaining column holds values.
    Table,
    /// Full sheet as read, positional layout preserved.
    Raw,
}

/// One fixed load step: output key, source file stem, parse mode and a
/// numeric post-processing factor applied to the value columns.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSpec {
    /// Key under which the parsed frame is inserted into the collection.
    pub key: &'static str,
    /// Path relative to the input root, `/`-separated, without extension.
    pub subpath: &'static str,
    pub mode: ParseMode,
    pub factor: f64,
}

impl DatasetSpec {
    /// Relative path with OS-native separators, still extension-less.
    pub fn relative_stem(&self) -> PathBuf {
        self.subpath.split('/').collect()
    }
}

/// Energy content of hydrogen storable in a cavern volume sized for methane.
pub const METHANE_TO_HYDROGEN_CAPACITY: f64 = 3.0 / 10.0;

/// The fixed dataset catalog.
///
/// Entries are mutually independent; the order below mirrors the grouping of
/// the input directory and carries no semantic weight. The two pipeline keys
/// intentionally point at the same source file, and both salt-cavern keys
/// read the same methane capacity sheet (the hydrogen one rescaled).
pub static SPATIAL_CATALOG: &[DatasetSpec] = &[
    // Wind
    DatasetSpec {
        key: "Wind (onshore), capacityMax",
        subpath: "SpatialData/Wind/maxCapacityOnshore_GW_el",
        mode: ParseMode::Series,
        factor: 1.0,
    },
    DatasetSpec {
        key: "Wind (onshore), operationRateMax",
        subpath: "SpatialData/Wind/maxOperationRateOnshore_el",
        mode: ParseMode::Raw,
        factor: 1.0,
    },
    DatasetSpec {
        key: "Wind (offshore), capacityMax",
        subpath: "SpatialData/Wind/maxCapacityOffshore_GW_el",
        mode: ParseMode::Series,
        factor: 1.0,
    },
    DatasetSpec {
        key: "Wind (offshore), operationRateMax",
        subpath: "SpatialData/Wind/maxOperationRateOffshore_el",
        mode: ParseMode::Raw,
        factor: 1.0,
    },
    // Photovoltaics
    DatasetSpec {
        key: "PV, capacityMax",
        subpath: "SpatialData/PV/maxCapacityPV_GW_el",
        mode: ParseMode::Series,
        factor: 1.0,
    },
    DatasetSpec {
        key: "PV, operationRateMax",
        subpath: "SpatialData/PV/maxOperationRatePV_el",
        mode: ParseMode::Raw,
        factor: 1.0,
    },
    // Hydro power
    DatasetSpec {
        key: "Existing run-of-river plants, capacityFix",
        subpath: "SpatialData/HydroPower/fixCapacityROR_GW_el",
        mode: ParseMode::Series,
        factor: 1.0,
    },
    DatasetSpec {
        key: "Existing run-of-river plants, operationRateFix",
        subpath: "SpatialData/HydroPower/fixOperationRateROR_GW_el",
        mode: ParseMode::Raw,
        factor: 1.0,
    },
    DatasetSpec {
        key: "Pumped hydro storage, capacityFix",
        subpath: "SpatialData/HydroPower/fixCapacityPHS_storage_GWh_energyPHS",
        mode: ParseMode::Series,
        factor: 1.0,
    },
    // Biogas
    DatasetSpec {
        key: "Biogas, operationRateMax",
        subpath: "SpatialData/Biogas/biogasPotential_GWh_biogas",
        mode: ParseMode::Raw,
        factor: 1.0,
    },
    // Natural gas plants
    DatasetSpec {
        key: "Existing CCGT plants (methane), capacityMax",
        subpath: "SpatialData/NaturalGasPlants/existingCombinedCycleGasTurbinePlantsCapacity_GW_el",
        mode: ParseMode::Series,
        factor: 1.0,
    },
    // Geological storage
    DatasetSpec {
        key: "Salt caverns (hydrogen), capacityMax",
        subpath: "SpatialData/GeologicalStorage/existingSaltCavernsCapacity_GWh_methane",
        mode: ParseMode::Series,
        factor: METHANE_TO_HYDROGEN_CAPACITY,
    },
    DatasetSpec {
        key: "Salt caverns (methane), capacityMax",
        subpath: "SpatialData/GeologicalStorage/existingSaltCavernsCapacity_GWh_methane",
        mode: ParseMode::Series,
        factor: 1.0,
    },
    // Electric grid
    DatasetSpec {
        key: "AC cables, capacityFix",
        subpath: "SpatialData/ElectricGrid/ACcableExistingCapacity_GW_el",
        mode: ParseMode::Table,
        factor: 1.0,
    },
    DatasetSpec {
        key: "DC cables, capacityFix",
        subpath: "SpatialData/ElectricGrid/DCcableExistingCapacity_GW_el",
        mode: ParseMode::Table,
        factor: 1.0,
    },
    DatasetSpec {
        key: "DC cables, distances",
        subpath: "SpatialData/ElectricGrid/DCcableLength_km",
        mode: ParseMode::Table,
        factor: 1.0,
    },
    DatasetSpec {
        key: "DC cables, losses",
        subpath: "SpatialData/ElectricGrid/DCcableLosses",
        mode: ParseMode::Table,
        factor: 1.0,
    },
    // Pipelines
    DatasetSpec {
        key: "Pipelines, eligibility",
        subpath: "SpatialData/Pipelines/pipelineIncidence",
        mode: ParseMode::Table,
        factor: 1.0,
    },
    DatasetSpec {
        key: "Pipelines, distances",
        subpath: "SpatialData/Pipelines/pipelineIncidence",
        mode: ParseMode::Table,
        factor: 1.0,
    },
    // Demands
    DatasetSpec {
        key: "Electricity demand, operationRateFix",
        subpath: "SpatialData/Demands/electricityDemand_GWh_el",
        mode: ParseMode::Raw,
        factor: 1.0,
    },
    DatasetSpec {
        key: "Hydrogen demand, operationRateFix",
        subpath: "SpatialData/Demands/hydrogenDemand_GWh_hydrogen",
        mode: ParseMode::Raw,
        factor: 1.0,
    },
];

/// All output keys, in catalog order.
pub fn output_keys() -> impl Iterator<Item = &'static str> {
    SPATIAL_CATALOG.iter().map(|spec| spec.key)
}
