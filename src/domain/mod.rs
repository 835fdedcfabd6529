// Domain layer: form inputs and records. No dependencies beyond std/serde.

pub mod model;
