pub mod build;
pub mod population;
pub mod response;
pub mod result;

pub use build::{DataCategory, ReferenceBuild};
pub use population::{AlleleCounts, PopulationRecord};
pub use response::{DatasetFrequencies, GraphQlError, GraphQlResponse, VariantRecord, VariantResponse};
pub use result::{Resolution, ResolutionResult, format_frequency};
